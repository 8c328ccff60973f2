//! Static franchise directory.
//!
//! stats.nba.com identifies the 30 current franchises by fixed IDs; relocated
//! franchises keep their ID, so the directory is keyed by today's names.

use crate::cli::types::TeamId;
use serde::{Deserialize, Serialize};

/// One franchise in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub full_name: String,
    pub abbreviation: String,
    /// Calendar year the franchise played its first season in.
    pub year_founded: u16,
}

impl Team {
    /// Whether the franchise played in the season ending in `end_year`.
    pub fn active_in(&self, end_year: u16) -> bool {
        self.year_founded < end_year
    }
}

const NBA_TEAM_ROWS: &[(u64, &str, &str, u16)] = &[
    (1610612737, "Atlanta Hawks", "ATL", 1949),
    (1610612738, "Boston Celtics", "BOS", 1946),
    (1610612739, "Cleveland Cavaliers", "CLE", 1970),
    (1610612740, "New Orleans Pelicans", "NOP", 2002),
    (1610612741, "Chicago Bulls", "CHI", 1966),
    (1610612742, "Dallas Mavericks", "DAL", 1980),
    (1610612743, "Denver Nuggets", "DEN", 1976),
    (1610612744, "Golden State Warriors", "GSW", 1946),
    (1610612745, "Houston Rockets", "HOU", 1967),
    (1610612746, "Los Angeles Clippers", "LAC", 1970),
    (1610612747, "Los Angeles Lakers", "LAL", 1948),
    (1610612748, "Miami Heat", "MIA", 1988),
    (1610612749, "Milwaukee Bucks", "MIL", 1968),
    (1610612750, "Minnesota Timberwolves", "MIN", 1989),
    (1610612751, "Brooklyn Nets", "BKN", 1976),
    (1610612752, "New York Knicks", "NYK", 1946),
    (1610612753, "Orlando Magic", "ORL", 1989),
    (1610612754, "Indiana Pacers", "IND", 1976),
    (1610612755, "Philadelphia 76ers", "PHI", 1949),
    (1610612756, "Phoenix Suns", "PHX", 1968),
    (1610612757, "Portland Trail Blazers", "POR", 1970),
    (1610612758, "Sacramento Kings", "SAC", 1948),
    (1610612759, "San Antonio Spurs", "SAS", 1976),
    (1610612760, "Oklahoma City Thunder", "OKC", 1967),
    (1610612761, "Toronto Raptors", "TOR", 1995),
    (1610612762, "Utah Jazz", "UTA", 1974),
    (1610612763, "Memphis Grizzlies", "MEM", 1995),
    (1610612764, "Washington Wizards", "WAS", 1961),
    (1610612765, "Detroit Pistons", "DET", 1948),
    (1610612766, "Charlotte Hornets", "CHA", 1988),
];

/// All 30 franchises.
pub fn nba_teams() -> Vec<Team> {
    NBA_TEAM_ROWS
        .iter()
        .map(|&(id, full_name, abbreviation, year_founded)| Team {
            id: TeamId::new(id),
            full_name: full_name.to_string(),
            abbreviation: abbreviation.to_string(),
            year_founded,
        })
        .collect()
}

/// Exact full-name lookup.
pub fn find_team_by_full_name<'a>(teams: &'a [Team], full_name: &str) -> Option<&'a Team> {
    teams.iter().find(|t| t.full_name == full_name)
}

/// Franchises that played in the season ending in `end_year`.
pub fn teams_active_in(teams: &[Team], end_year: u16) -> Vec<Team> {
    teams
        .iter()
        .filter(|t| t.active_in(end_year))
        .cloned()
        .collect()
}
