//! NBA player heights by season
//!
//! Fetches historical rosters and team statistics from stats.nba.com and
//! computes, for every season since 1979-80:
//!
//! - the league-wide average player height,
//! - the tallest player,
//! - the average height of the champion's five heaviest-minutes players.
//!
//! Rosters and champion averages are cached per season as JSON files, so a
//! season is fetched once and then served from disk on every later run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nba_heights::{
//!     analysis::SummaryBuilder, core::RateLimiter, nba::{ChampionTable, NbaStatsClient},
//!     Config, EndYear,
//! };
//!
//! # async fn example() -> nba_heights::Result<()> {
//! let config = Config::default();
//! let client = NbaStatsClient::new(config.request_timeout, RateLimiter::new(config.request_interval))?;
//! let builder = SummaryBuilder::new(Arc::new(client), ChampionTable::nba(), &config);
//!
//! let summary = builder.build_range(EndYear::new(1980), EndYear::new(1990)).await;
//! nba_heights::report::write_csv(&summary.rows, &config.summary_csv_path())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Override the cache directory without passing `--cache-dir`:
//! ```bash
//! export NBA_HEIGHTS_CACHE_DIR=/data/nba-heights
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod nba;
pub mod report;

#[cfg(test)]
mod testing_utils;

// Re-export commonly used types
pub use cli::types::{season_label, EndYear, PlayerId, TeamId};
pub use config::{Config, RosterSource, CACHE_DIR_ENV_VAR};
pub use error::{HeightsError, Result};
