//! Per-season league rosters, deduplicated by player and cached on disk.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::analysis::outcome::{Outcome, OutcomeCounts};
use crate::cli::types::{EndYear, PlayerId, TeamId};
use crate::config::{Config, RosterSource};
use crate::core::{retry_transient, CacheStatus, RetryPolicy, RosterCacheKey, UnifiedCache};
use crate::nba::teams::{teams_active_in, Team};
use crate::nba::types::RosterEntry;
use crate::nba::{parse_height, StatsSource};


/// One player's height for a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHeightRecord {
    pub player_id: PlayerId,
    pub height_in: u16,
    pub name: String,
    pub team_id: TeamId,
}

/// Every player who appeared in a season, at most once each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PlayerHeightRecord>", into = "Vec<PlayerHeightRecord>")]
pub struct SeasonRoster {
    players: Vec<PlayerHeightRecord>,
}

impl SeasonRoster {
    /// Build from raw API entries, dropping those without a parseable height.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = RosterEntry>,
    {
        let records = entries
            .into_iter()
            .filter_map(|e| {
                let height_in = parse_height(e.height.as_deref())?;
                Some(PlayerHeightRecord {
                    player_id: e.player_id,
                    height_in,
                    name: e.player_name,
                    team_id: e.team_id,
                })
            })
            .collect();
        Self::from_records(records)
    }

    /// Deduplicate by player id.
    ///
    /// Traded players appear once per team; records are ordered by
    /// `(player_id, team_id)` and the first of each player is kept, so the
    /// survivor doesn't depend on fetch order.
    pub fn from_records(mut records: Vec<PlayerHeightRecord>) -> Self {
        records.sort_by_key(|r| (r.player_id, r.team_id));
        records.dedup_by_key(|r| r.player_id);
        Self { players: records }
    }

    pub fn players(&self) -> &[PlayerHeightRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Mean height in inches; `None` for an empty roster.
    pub fn average_height(&self) -> Option<f64> {
        if self.players.is_empty() {
            return None;
        }
        let total: u64 = self.players.iter().map(|p| u64::from(p.height_in)).sum();
        Some(total as f64 / self.players.len() as f64)
    }

    /// Tallest player's height in inches.
    pub fn tallest(&self) -> Option<u16> {
        self.players.iter().map(|p| p.height_in).max()
    }

    /// Heights of the listed players that are on this roster.
    pub fn heights_of(&self, ids: &[PlayerId]) -> Vec<u16> {
        let wanted: HashSet<PlayerId> = ids.iter().copied().collect();
        self.players
            .iter()
            .filter(|p| wanted.contains(&p.player_id))
            .map(|p| p.height_in)
            .collect()
    }
}

impl From<Vec<PlayerHeightRecord>> for SeasonRoster {
    fn from(records: Vec<PlayerHeightRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<SeasonRoster> for Vec<PlayerHeightRecord> {
    fn from(roster: SeasonRoster) -> Self {
        roster.players
    }
}

/// Season rosters backed by the `season_cache` directory.
///
/// A roster is fetched at most once per season and then served from disk on
/// every later run, empty rosters included.
pub struct RosterCache {
    source: Arc<dyn StatsSource>,
    cache: UnifiedCache<RosterCacheKey, SeasonRoster>,
    strategy: RosterSource,
    min_cached_size: usize,
    retry: RetryPolicy,
}

impl RosterCache {
    pub fn new(source: Arc<dyn StatsSource>, config: &Config) -> Self {
        Self {
            source,
            cache: UnifiedCache::new(config.season_cache_dir(), config.memory_cache_capacity),
            strategy: config.roster_source,
            min_cached_size: config.min_cached_roster_size,
            retry: config.roster_retry,
        }
    }

    /// Roster for the season ending in `end_year`.
    pub async fn get_roster(&self, end_year: EndYear) -> SeasonRoster {
        self.load(end_year).await.0
    }

    /// Roster plus whether it came from the cache.
    pub async fn load(&self, end_year: EndYear) -> (SeasonRoster, CacheStatus) {
        let key = RosterCacheKey { end_year };
        if let Some(roster) = self.cache.get(&key) {
            if roster.len() >= self.min_cached_size {
                debug!("Roster {} loaded from cache ({} players)", end_year, roster.len());
                return (roster, CacheStatus::Hit);
            }
            info!(
                "Cached roster for {} has {} players (minimum {}), fetching again",
                end_year,
                roster.len(),
                self.min_cached_size
            );
        }
        (self.fetch_and_store(end_year).await, CacheStatus::Miss)
    }

    /// Fetch again and overwrite the cached roster.
    pub async fn refresh(&self, end_year: EndYear) -> (SeasonRoster, CacheStatus) {
        (self.fetch_and_store(end_year).await, CacheStatus::Refreshed)
    }

    async fn fetch_and_store(&self, end_year: EndYear) -> SeasonRoster {
        let roster = SeasonRoster::from_entries(self.fetch_entries(end_year).await);
        info!("Season {}: {} unique players", end_year.season_label(), roster.len());

        if let Err(e) = self.cache.put(RosterCacheKey { end_year }, roster.clone()) {
            warn!("Could not cache roster for {}: {}", end_year, e);
        }
        roster
    }

    async fn fetch_entries(&self, end_year: EndYear) -> Vec<RosterEntry> {
        let season = end_year.season_label();
        match self.strategy {
            RosterSource::TeamRosters => {
                let teams = teams_active_in(&self.source.teams(), end_year.as_u16());
                let mut counts = OutcomeCounts::default();
                let mut entries = Vec::new();
                for team in &teams {
                    let outcome = self.fetch_team(team, &season).await;
                    counts.record(&outcome);
                    if let Outcome::Ok(team_entries) = outcome {
                        entries.extend(team_entries);
                    }
                }
                debug!("Season {} team rosters: {}", season, counts);
                entries
            }
            RosterSource::LeagueBio => {
                let what = format!("player bios {season}");
                let res = retry_transient(&self.retry, &what, || {
                    self.source.league_player_bios(&season)
                })
                .await;
                match Outcome::from(res) {
                    Outcome::Ok(entries) => entries,
                    other => {
                        warn!(
                            "Skipping {}: {}",
                            what,
                            other.reason().unwrap_or("no data")
                        );
                        Vec::new()
                    }
                }
            }
        }
    }

    async fn fetch_team(&self, team: &Team, season: &str) -> Outcome<Vec<RosterEntry>> {
        let what = format!("{} {}", team.abbreviation, season);
        let res = retry_transient(&self.retry, &what, || {
            self.source.team_roster(team.id, season)
        })
        .await;
        let outcome = Outcome::from(res);
        if let Some(reason) = outcome.reason() {
            warn!("Skipping roster for {}: {}", what, reason);
        }
        outcome
    }

    pub fn cache(&self) -> &UnifiedCache<RosterCacheKey, SeasonRoster> {
        &self.cache
    }
}
