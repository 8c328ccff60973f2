//! Core utilities for the NBA heights pipeline
//!
//! - `cache`: two-tier (memory + file) cache for season results
//! - `http`: stats.nba.com headers and client construction
//! - `throttle`: request pacing and bounded retries

pub mod cache;
pub mod http;
pub mod throttle;

// Re-export commonly used items for convenience
pub use cache::{
    default_cache_dir, try_read_to_string, write_string, CacheKey, CacheStatus, ChampionCacheKey,
    RosterCacheKey, UnifiedCache,
};
pub use http::{build_client, stats_header_map};
pub use throttle::{retry_transient, RateLimiter, RetryPolicy};
