//! The seam between the pipeline and the stats API.

use async_trait::async_trait;

use crate::cli::types::TeamId;
use crate::nba::teams::{nba_teams, Team};
use crate::nba::types::{PlayerSeasonTotals, RosterEntry};
use crate::Result;

/// Remote data the pipeline reads. `season` is a label such as `"1979-80"`.
///
/// Implementations do one request per call; retries and caching live in the
/// callers.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Players listed on one team's roster for a season.
    async fn team_roster(&self, team_id: TeamId, season: &str) -> Result<Vec<RosterEntry>>;

    /// Per-player regular season totals for one team.
    async fn team_player_totals(
        &self,
        team_id: TeamId,
        season: &str,
    ) -> Result<Vec<PlayerSeasonTotals>>;

    /// Every player in the league for a season, in one request.
    async fn league_player_bios(&self, season: &str) -> Result<Vec<RosterEntry>>;

    /// Franchise directory.
    fn teams(&self) -> Vec<Team> {
        nba_teams()
    }
}
