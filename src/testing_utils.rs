//! In-process `StatsSource` fake for unit tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::cli::types::{PlayerId, TeamId};
use crate::nba::teams::{nba_teams, Team};
use crate::nba::types::{PlayerSeasonTotals, RosterEntry};
use crate::nba::StatsSource;
use crate::{HeightsError, Result};

pub const LAKERS: TeamId = TeamId(1610612747);
pub const CELTICS: TeamId = TeamId(1610612738);

pub fn entry(id: u64, team: TeamId, height: &str) -> RosterEntry {
    RosterEntry {
        player_id: PlayerId::new(id),
        player_name: format!("Player {id}"),
        team_id: team,
        height: Some(height.to_string()).filter(|h| !h.is_empty()),
    }
}

pub fn totals(id: u64, minutes: f64) -> PlayerSeasonTotals {
    PlayerSeasonTotals {
        player_id: PlayerId::new(id),
        player_name: format!("Player {id}"),
        minutes,
    }
}

/// Canned responses keyed by team and season label, with call counters.
#[derive(Default)]
pub struct FakeStatsSource {
    rosters: HashMap<(TeamId, String), Vec<RosterEntry>>,
    failing_rosters: HashSet<TeamId>,
    fail_all_rosters: bool,
    totals: HashMap<(TeamId, String), Vec<PlayerSeasonTotals>>,
    bios: HashMap<String, Vec<RosterEntry>>,
    totals_timeouts: AtomicU32,
    roster_timeouts: Mutex<HashMap<TeamId, u32>>,
    bio_timeouts: AtomicU32,
    roster_calls_by_team: Mutex<HashMap<TeamId, usize>>,
    teams: Option<Vec<Team>>,
    pub roster_calls: AtomicUsize,
    pub totals_calls: AtomicUsize,
    pub bio_calls: AtomicUsize,
}

impl FakeStatsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(mut self, team: TeamId, season: &str, entries: Vec<RosterEntry>) -> Self {
        self.rosters.insert((team, season.to_string()), entries);
        self
    }

    pub fn with_failing_roster(mut self, team: TeamId) -> Self {
        self.failing_rosters.insert(team);
        self
    }

    pub fn with_all_rosters_failing(mut self) -> Self {
        self.fail_all_rosters = true;
        self
    }

    pub fn with_totals(mut self, team: TeamId, season: &str, rows: Vec<PlayerSeasonTotals>) -> Self {
        self.totals.insert((team, season.to_string()), rows);
        self
    }

    pub fn with_bios(mut self, season: &str, entries: Vec<RosterEntry>) -> Self {
        self.bios.insert(season.to_string(), entries);
        self
    }

    /// Time out the next `n` player-totals requests.
    pub fn with_totals_timeouts(self, n: u32) -> Self {
        self.totals_timeouts.store(n, Ordering::SeqCst);
        self
    }

    /// Time out the next `n` roster requests for `team`.
    pub fn with_roster_timeouts(self, team: TeamId, n: u32) -> Self {
        if let Ok(mut pending) = self.roster_timeouts.lock() {
            pending.insert(team, n);
        }
        self
    }

    /// Time out the next `n` league bio requests.
    pub fn with_bio_timeouts(self, n: u32) -> Self {
        self.bio_timeouts.store(n, Ordering::SeqCst);
        self
    }

    pub fn roster_calls_for(&self, team: TeamId) -> usize {
        self.roster_calls_by_team
            .lock()
            .map(|calls| calls.get(&team).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = Some(teams);
        self
    }

    pub fn total_calls(&self) -> usize {
        self.roster_calls.load(Ordering::SeqCst)
            + self.totals_calls.load(Ordering::SeqCst)
            + self.bio_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsSource for FakeStatsSource {
    async fn team_roster(&self, team_id: TeamId, season: &str) -> Result<Vec<RosterEntry>> {
        self.roster_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut calls) = self.roster_calls_by_team.lock() {
            *calls.entry(team_id).or_default() += 1;
        }
        if let Ok(mut pending) = self.roster_timeouts.lock() {
            if let Some(n) = pending.get_mut(&team_id).filter(|n| **n > 0) {
                *n -= 1;
                return Err(HeightsError::Timeout {
                    url: format!("commonteamroster/{team_id}/{season}"),
                });
            }
        }
        if self.fail_all_rosters || self.failing_rosters.contains(&team_id) {
            return Err(HeightsError::MissingResultSet {
                name: "CommonTeamRoster".to_string(),
            });
        }
        Ok(self
            .rosters
            .get(&(team_id, season.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn team_player_totals(
        &self,
        team_id: TeamId,
        season: &str,
    ) -> Result<Vec<PlayerSeasonTotals>> {
        self.totals_calls.fetch_add(1, Ordering::SeqCst);
        let pending = self.totals_timeouts.load(Ordering::SeqCst);
        if pending > 0 {
            self.totals_timeouts.store(pending - 1, Ordering::SeqCst);
            return Err(HeightsError::Timeout {
                url: format!("teamplayerdashboard/{team_id}/{season}"),
            });
        }
        self.totals
            .get(&(team_id, season.to_string()))
            .cloned()
            .ok_or_else(|| HeightsError::MissingResultSet {
                name: "PlayersSeasonTotals".to_string(),
            })
    }

    async fn league_player_bios(&self, season: &str) -> Result<Vec<RosterEntry>> {
        self.bio_calls.fetch_add(1, Ordering::SeqCst);
        let pending = self.bio_timeouts.load(Ordering::SeqCst);
        if pending > 0 {
            self.bio_timeouts.store(pending - 1, Ordering::SeqCst);
            return Err(HeightsError::Timeout {
                url: format!("leaguedashplayerbiostats/{season}"),
            });
        }
        self.bios
            .get(season)
            .cloned()
            .ok_or_else(|| HeightsError::MissingResultSet {
                name: "LeagueDashPlayerBioStats".to_string(),
            })
    }

    fn teams(&self) -> Vec<Team> {
        self.teams.clone().unwrap_or_else(nba_teams)
    }
}
