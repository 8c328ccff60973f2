//! HTTP utilities for stats.nba.com communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, HOST, REFERER, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// stats.nba.com stalls requests that don't look like they come from its own site.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Headers sent with every stats request.
///
/// `host` is only set when it isn't empty, so tests can point the client at a
/// local mock server.
pub fn stats_header_map(host: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    if let Some(host) = host.filter(|h| !h.is_empty()) {
        h.insert(HOST, HeaderValue::from_str(host)?);
    }
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    Ok(h)
}

/// Build the shared client with a per-request timeout.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}
