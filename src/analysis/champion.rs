//! Average height of each champion's five heaviest-minutes players.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::analysis::outcome::Outcome;
use crate::analysis::roster::SeasonRoster;
use crate::cli::types::{EndYear, PlayerId};
use crate::config::Config;
use crate::core::{retry_transient, CacheStatus, ChampionCacheKey, RetryPolicy, UnifiedCache};
use crate::nba::teams::find_team_by_full_name;
use crate::nba::types::PlayerSeasonTotals;
use crate::nba::{ChampionTable, StatsSource};
use crate::HeightsError;

#[cfg(test)]
mod tests;

/// Players counted as a champion's starters.
pub const STARTER_COUNT: usize = 5;

/// Cached champion-starter result for one season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ChampionAverage {
    Value(f64),
    /// Totals were fetched but none of the starters were on the season roster.
    Unavailable,
}

impl ChampionAverage {
    pub fn value(&self) -> Option<f64> {
        match self {
            ChampionAverage::Value(v) => Some(*v),
            ChampionAverage::Unavailable => None,
        }
    }
}

/// IDs of the `n` players with the most minutes, highest first.
///
/// Equal minutes are ordered by ascending player id.
pub fn top_minutes_leaders(totals: &[PlayerSeasonTotals], n: usize) -> Vec<PlayerId> {
    let mut sorted: Vec<&PlayerSeasonTotals> = totals.iter().collect();
    sorted.sort_by(|a, b| {
        b.minutes
            .total_cmp(&a.minutes)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    sorted.into_iter().take(n).map(|t| t.player_id).collect()
}

/// Mean roster height of `starters`, and how many of them were found.
pub fn starter_average(roster: &SeasonRoster, starters: &[PlayerId]) -> (ChampionAverage, usize) {
    let heights = roster.heights_of(starters);
    if heights.is_empty() {
        return (ChampionAverage::Unavailable, 0);
    }
    let total: u64 = heights.iter().map(|h| u64::from(*h)).sum();
    (
        ChampionAverage::Value(total as f64 / heights.len() as f64),
        heights.len(),
    )
}

/// One champion evaluation and where its value came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ChampionEvaluation {
    pub outcome: Outcome<ChampionAverage>,
    pub status: CacheStatus,
    /// A player-totals request was issued.
    pub fetched: bool,
}

/// Computes and caches champion-starter averages in `champ_cache`.
pub struct ChampionAggregator {
    source: Arc<dyn StatsSource>,
    cache: UnifiedCache<ChampionCacheKey, ChampionAverage>,
    champions: ChampionTable,
    retry: RetryPolicy,
    reuse_unavailable: bool,
}

impl ChampionAggregator {
    pub fn new(source: Arc<dyn StatsSource>, champions: ChampionTable, config: &Config) -> Self {
        Self {
            source,
            cache: UnifiedCache::new(config.champ_cache_dir(), config.memory_cache_capacity),
            champions,
            retry: config.champion_retry,
            reuse_unavailable: config.reuse_unavailable_champion,
        }
    }

    pub fn champions(&self) -> &ChampionTable {
        &self.champions
    }

    /// Average champion-starter height, or `None` when it can't be determined.
    pub async fn champion_starter_avg(&self, end_year: EndYear, roster: &SeasonRoster) -> Option<f64> {
        self.evaluate(end_year, roster)
            .await
            .outcome
            .ok()
            .and_then(|avg| avg.value())
    }

    /// Full result for one season, served from the cache when possible.
    ///
    /// Only computed results (including `Unavailable`) are written; skipped
    /// and failed seasons are tried again on the next run.
    pub async fn evaluate(&self, end_year: EndYear, roster: &SeasonRoster) -> ChampionEvaluation {
        let key = ChampionCacheKey { end_year };
        if let Some(cached) = self.cache.get(&key) {
            if cached != ChampionAverage::Unavailable || self.reuse_unavailable {
                debug!("Champion average {} loaded from cache", end_year);
                return ChampionEvaluation {
                    outcome: Outcome::Ok(cached),
                    status: CacheStatus::Hit,
                    fetched: false,
                };
            }
        }
        self.compute_and_store(end_year, roster, CacheStatus::Miss).await
    }

    /// Recompute without reading the cache, then overwrite the entry.
    pub async fn refresh(&self, end_year: EndYear, roster: &SeasonRoster) -> ChampionEvaluation {
        self.compute_and_store(end_year, roster, CacheStatus::Refreshed)
            .await
    }

    async fn compute_and_store(
        &self,
        end_year: EndYear,
        roster: &SeasonRoster,
        status: CacheStatus,
    ) -> ChampionEvaluation {
        let Some(champion) = self.champions.champion_name(end_year.as_u16()) else {
            return ChampionEvaluation {
                outcome: Outcome::skipped(format!("no champion on record for {end_year}")),
                status,
                fetched: false,
            };
        };
        if roster.is_empty() {
            return ChampionEvaluation {
                outcome: Outcome::skipped(format!("empty roster for {end_year}")),
                status,
                fetched: false,
            };
        }

        let (outcome, fetched) = self.compute(end_year, champion, roster).await;
        match &outcome {
            Outcome::Ok(avg) => {
                if let Err(e) = self.cache.put(ChampionCacheKey { end_year }, *avg) {
                    warn!("Could not cache champion average for {}: {}", end_year, e);
                }
            }
            other => warn!(
                "Champion average for {} unavailable: {}",
                end_year,
                other.reason().unwrap_or("unknown")
            ),
        }
        ChampionEvaluation {
            outcome,
            status,
            fetched,
        }
    }

    async fn compute(
        &self,
        end_year: EndYear,
        champion: &str,
        roster: &SeasonRoster,
    ) -> (Outcome<ChampionAverage>, bool) {
        let teams = self.source.teams();
        let Some(team) = find_team_by_full_name(&teams, champion) else {
            let err = HeightsError::TeamNotFound {
                name: champion.to_string(),
            };
            return (Outcome::failed(err.to_string()), false);
        };

        let season = end_year.season_label();
        let what = format!("{} {}", team.abbreviation, season);
        let res = retry_transient(&self.retry, &what, || {
            self.source.team_player_totals(team.id, &season)
        })
        .await;
        let totals = match res {
            Ok(totals) => totals,
            Err(e) => return (Outcome::failed(e.to_string()), true),
        };

        let starters = top_minutes_leaders(&totals, STARTER_COUNT);
        let (avg, matched) = starter_average(roster, &starters);
        match avg {
            ChampionAverage::Value(v) => {
                info!(
                    "{} champion {}: starters average {:.1} in ({}/{} matched)",
                    season,
                    champion,
                    v,
                    matched,
                    starters.len()
                );
                if matched < starters.len() {
                    warn!(
                        "Only {}/{} {} starters found on the {} roster",
                        matched,
                        starters.len(),
                        team.abbreviation,
                        season
                    );
                }
            }
            ChampionAverage::Unavailable => warn!(
                "None of the {} {} starters found on the season roster",
                season, team.abbreviation
            ),
        }
        (Outcome::Ok(avg), true)
    }

    pub fn cache(&self) -> &UnifiedCache<ChampionCacheKey, ChampionAverage> {
        &self.cache
    }
}
