//! Command implementations for the nba-heights CLI

pub mod build;
pub mod champions;
pub mod season;

use std::sync::Arc;

use crate::cli::CacheArgs;
use crate::config::{resolve_cache_dir, Config};
use crate::core::RateLimiter;
use crate::nba::{NbaStatsClient, StatsSource};
use crate::Result;


/// Apply the shared cache flags on top of `config`.
pub fn apply_cache_args(mut config: Config, args: CacheArgs) -> Config {
    config.cache_dir = resolve_cache_dir(args.cache_dir);
    config.roster_source = args.roster_source;
    config.min_cached_roster_size = args.min_roster_size;
    config.reuse_unavailable_champion = args.reuse_unavailable;
    config.refresh = args.refresh;
    config
}

/// stats.nba.com client paced by `config.request_interval`.
pub fn live_source(config: &Config) -> Result<Arc<dyn StatsSource>> {
    let client = NbaStatsClient::new(
        config.request_timeout,
        RateLimiter::new(config.request_interval),
    )?;
    Ok(Arc::new(client))
}
