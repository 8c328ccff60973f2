//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::RosterSource;
use types::EndYear;

/// Cache and fetch options shared by commands that touch the stats API.
#[derive(Debug, Args)]
pub struct CacheArgs {
    /// Cache directory (or set `NBA_HEIGHTS_CACHE_DIR`).
    #[clap(long)]
    pub cache_dir: Option<PathBuf>,

    /// Where season rosters come from when not cached.
    #[clap(long, value_enum, default_value_t = RosterSource::TeamRosters)]
    pub roster_source: RosterSource,

    /// Refetch cached rosters with fewer players than this (0 keeps every cached roster).
    #[clap(long, default_value_t = 0)]
    pub min_roster_size: usize,

    /// Keep cached "unavailable" champion averages instead of recomputing them.
    #[clap(long)]
    pub reuse_unavailable: bool,

    /// Ignore cached seasons, fetch them again and overwrite the cache.
    #[clap(long)]
    pub refresh: bool,
}

#[derive(Debug, Parser)]
#[clap(
    name = "nba-heights",
    about = "NBA player heights by season: league average, tallest player and champion starters"
)]
pub struct NbaHeights {
    /// Debug-level logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the season table, write the CSV and render the chart.
    Build {
        /// First season, by end year (1980 = 1979-80).
        #[clap(long, short, default_value_t = EndYear::default())]
        start_year: EndYear,

        /// Last season, by end year. Defaults to the current calendar year.
        #[clap(long, short)]
        end_year: Option<EndYear>,

        /// Directory for the CSV and the chart.
        #[clap(long, short, default_value = ".")]
        out_dir: PathBuf,

        /// Skip rendering the chart.
        #[clap(long)]
        no_chart: bool,

        #[clap(flatten)]
        cache: CacheArgs,
    },

    /// Compute and print a single season.
    Season {
        /// Season end year (e.g. 1980 for 1979-80).
        year: EndYear,

        #[clap(flatten)]
        cache: CacheArgs,
    },

    /// Print the built-in champion table.
    Champions,
}
