//! One summary row per season, built by driving both caches year by year.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::analysis::champion::ChampionAggregator;
use crate::analysis::outcome::{Outcome, OutcomeCounts};
use crate::analysis::roster::RosterCache;
use crate::cli::types::EndYear;
use crate::config::Config;
use crate::core::RateLimiter;
use crate::nba::{ChampionTable, StatsSource};


/// Aggregate height metrics for one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummaryRow {
    pub season_end_year: u16,
    pub season: String,
    pub avg_height_in: Option<f64>,
    pub tallest_height_in: Option<f64>,
    pub champ_starter_avg: Option<f64>,
    pub n_players: usize,
}

impl SeasonSummaryRow {
    /// Both league metrics are present.
    pub fn is_complete(&self) -> bool {
        self.avg_height_in.is_some() && self.tallest_height_in.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonSummary {
    pub rows: Vec<SeasonSummaryRow>,
    /// Champion-average result per season.
    pub champion_outcomes: OutcomeCounts,
    /// Seasons served entirely from the cache.
    pub cached_seasons: usize,
}

/// Drives rosters and champion averages over a range of end-years.
pub struct SummaryBuilder {
    rosters: RosterCache,
    champions: ChampionAggregator,
    season_throttle: RateLimiter,
    default_end: Option<u16>,
    refresh: bool,
}

impl SummaryBuilder {
    pub fn new(source: Arc<dyn StatsSource>, champions: ChampionTable, config: &Config) -> Self {
        Self {
            rosters: RosterCache::new(source.clone(), config),
            champions: ChampionAggregator::new(source, champions, config),
            season_throttle: RateLimiter::new(config.season_pause),
            default_end: config.end_year,
            refresh: config.refresh,
        }
    }

    /// Seasons from `start` through the configured end-year, or the current
    /// calendar year when none is set.
    pub async fn build_summary(&self, start: EndYear) -> SeasonSummary {
        let end = self
            .default_end
            .unwrap_or_else(|| current_end_year().as_u16());
        self.build_range(start, EndYear::new(end)).await
    }

    /// Seasons `start..=end` in increasing order. An inverted range is empty.
    pub async fn build_range(&self, start: EndYear, end: EndYear) -> SeasonSummary {
        let mut summary = SeasonSummary::default();
        if start > end {
            return summary;
        }
        let total = season_count(start, end);

        for (i, year) in (start.as_u16()..=end.as_u16()).enumerate() {
            let end_year = EndYear::new(year);
            info!("[{}/{}] Season {}", i + 1, total, end_year.season_label());

            let (row, report) = self.season(end_year).await;
            summary.champion_outcomes.record(&report.champion);
            if report.touched_network {
                self.season_throttle.pause().await;
            } else {
                summary.cached_seasons += 1;
            }
            summary.rows.push(row);
        }
        let (in_memory, capacity) = self.rosters.cache().memory_stats();
        debug!(
            "Summary built: {} seasons, {} from cache, champions {}, {}/{} rosters in memory",
            summary.rows.len(),
            summary.cached_seasons,
            summary.champion_outcomes,
            in_memory,
            capacity
        );
        summary
    }

    /// Row for a single season, without the trailing pause.
    pub async fn build_season(&self, end_year: EndYear) -> SeasonSummaryRow {
        self.season(end_year).await.0
    }

    async fn season(&self, end_year: EndYear) -> (SeasonSummaryRow, SeasonReport) {
        let (roster, roster_status) = if self.refresh {
            self.rosters.refresh(end_year).await
        } else {
            self.rosters.load(end_year).await
        };
        let champion = if self.refresh {
            self.champions.refresh(end_year, &roster).await
        } else {
            self.champions.evaluate(end_year, &roster).await
        };

        let row = SeasonSummaryRow {
            season_end_year: end_year.as_u16(),
            season: end_year.season_label(),
            avg_height_in: roster.average_height(),
            tallest_height_in: roster.tallest().map(f64::from),
            champ_starter_avg: champion.outcome.as_ref().ok().and_then(|avg| avg.value()),
            n_players: roster.len(),
        };
        let touched_network = !roster_status.is_hit() || champion.fetched;

        (
            row,
            SeasonReport {
                champion: champion.outcome.map(|_| ()),
                touched_network,
            },
        )
    }

    pub fn rosters(&self) -> &RosterCache {
        &self.rosters
    }

    pub fn champions(&self) -> &ChampionAggregator {
        &self.champions
    }
}

struct SeasonReport {
    champion: Outcome<()>,
    touched_network: bool,
}

/// Number of seasons in `start..=end`; 0 when inverted.
pub fn season_count(start: EndYear, end: EndYear) -> usize {
    (usize::from(end.as_u16()) + 1).saturating_sub(usize::from(start.as_u16()))
}

/// End-year of the season in progress, by local calendar year.
pub fn current_end_year() -> EndYear {
    let year = chrono::Local::now().year();
    EndYear::new(u16::try_from(year).unwrap_or(u16::MAX))
}
