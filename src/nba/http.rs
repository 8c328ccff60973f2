//! stats.nba.com client.

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client};
use std::time::Duration;
use tracing::debug;

use crate::cli::types::TeamId;
use crate::core::{build_client, stats_header_map, RateLimiter};
use crate::nba::source::StatsSource;
use crate::nba::types::{
    PlayerSeasonTotals, RosterEntry, StatsResponse, PLAYER_BIOS_RESULT_SET,
    PLAYER_TOTALS_RESULT_SET, ROSTER_RESULT_SET,
};
use crate::{HeightsError, Result};


/// Base path for the stats.nba.com API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Playoff games are excluded from every dashboard query.
const SEASON_TYPE: &str = "Regular Season";

/// Async client for the three stats endpoints the pipeline uses.
///
/// Every request goes through the shared [`RateLimiter`].
pub struct NbaStatsClient {
    client: Client,
    headers: HeaderMap,
    base_url: String,
    limiter: RateLimiter,
}

impl NbaStatsClient {
    pub fn new(timeout: Duration, limiter: RateLimiter) -> Result<Self> {
        Self::with_base_url(STATS_BASE_URL, timeout, limiter)
    }

    /// Point the client at another host, e.g. a mock server.
    pub fn with_base_url(base_url: &str, timeout: Duration, limiter: RateLimiter) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let host = reqwest::Url::parse(&base_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .filter(|h| h == "stats.nba.com");
        Ok(Self {
            client: build_client(timeout)?,
            headers: stats_header_map(host.as_deref())?,
            base_url,
            limiter,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_stats(&self, endpoint: &str, params: &[(&str, String)]) -> Result<StatsResponse> {
        self.limiter.acquire().await;

        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, params);

        let res = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await
            .map_err(|e| timeout_or_http(e, &url))?
            .error_for_status()?
            .json::<StatsResponse>()
            .await
            .map_err(|e| timeout_or_http(e, &url))?;

        Ok(res)
    }
}

fn timeout_or_http(e: reqwest::Error, url: &str) -> HeightsError {
    if e.is_timeout() {
        HeightsError::Timeout {
            url: url.to_string(),
        }
    } else {
        HeightsError::Http(e)
    }
}

/// Query parameters shared by the dashboard endpoints; the API rejects
/// requests that leave any of them out.
fn dashboard_params(season: &str) -> Vec<(&'static str, String)> {
    let blank = String::new;
    vec![
        ("DateFrom", blank()),
        ("DateTo", blank()),
        ("GameSegment", blank()),
        ("LastNGames", "0".to_string()),
        ("LeagueID", "00".to_string()),
        ("Location", blank()),
        ("Month", "0".to_string()),
        ("OpponentTeamID", "0".to_string()),
        ("Outcome", blank()),
        ("PORound", "0".to_string()),
        ("Period", "0".to_string()),
        ("Season", season.to_string()),
        ("SeasonSegment", blank()),
        ("SeasonType", SEASON_TYPE.to_string()),
        ("VsConference", blank()),
        ("VsDivision", blank()),
    ]
}

#[async_trait]
impl StatsSource for NbaStatsClient {
    async fn team_roster(&self, team_id: TeamId, season: &str) -> Result<Vec<RosterEntry>> {
        let params = [
            ("LeagueID", "00".to_string()),
            ("Season", season.to_string()),
            ("TeamID", team_id.to_string()),
        ];
        let resp = self.get_stats("commonteamroster", &params).await?;
        RosterEntry::from_team_roster(resp.result_set(ROSTER_RESULT_SET)?, team_id)
    }

    async fn team_player_totals(
        &self,
        team_id: TeamId,
        season: &str,
    ) -> Result<Vec<PlayerSeasonTotals>> {
        let mut params = dashboard_params(season);
        params.extend([
            ("MeasureType", "Base".to_string()),
            ("PaceAdjust", "N".to_string()),
            ("PerMode", "Totals".to_string()),
            ("PlusMinus", "N".to_string()),
            ("Rank", "N".to_string()),
            ("TeamID", team_id.to_string()),
        ]);
        let resp = self.get_stats("teamplayerdashboard", &params).await?;
        PlayerSeasonTotals::from_result_set(resp.result_set(PLAYER_TOTALS_RESULT_SET)?)
    }

    async fn league_player_bios(&self, season: &str) -> Result<Vec<RosterEntry>> {
        let mut params = dashboard_params(season);
        params.extend([
            ("PerMode", "PerGame".to_string()),
            ("TeamID", "0".to_string()),
        ]);
        let resp = self.get_stats("leaguedashplayerbiostats", &params).await?;
        RosterEntry::from_player_bios(resp.result_set(PLAYER_BIOS_RESULT_SET)?)
    }
}
