//! Payload types for the stats.nba.com endpoints.
//!
//! Every endpoint answers with the same envelope: a list of named result sets,
//! each a header row plus positional data rows. Rows are mapped to typed
//! structs by column name so column order changes don't matter.

use crate::cli::types::{PlayerId, TeamId};
use crate::error::{HeightsError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Result set names used by the pipeline.
pub const ROSTER_RESULT_SET: &str = "CommonTeamRoster";
pub const PLAYER_TOTALS_RESULT_SET: &str = "PlayersSeasonTotals";
pub const PLAYER_BIOS_RESULT_SET: &str = "LeagueDashPlayerBioStats";

/// Top-level stats.nba.com response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

impl StatsResponse {
    /// Find a result set by name.
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|rs| rs.name == name)
            .ok_or_else(|| HeightsError::MissingResultSet {
                name: name.to_string(),
            })
    }
}

/// One named table inside a stats response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Position of `column` in the header row.
    pub fn column(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| HeightsError::MissingColumn {
                result_set: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Like [`ResultSet::column`] but for columns that some seasons omit.
    pub fn optional_column(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }
}

/// One player line from a roster-style endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub player_name: String,
    pub team_id: TeamId,
    /// Raw `"6-7"` height text, if the API had one.
    pub height: Option<String>,
}

impl RosterEntry {
    /// Parse the `CommonTeamRoster` result set for `team_id`.
    pub fn from_team_roster(rs: &ResultSet, team_id: TeamId) -> Result<Vec<Self>> {
        let id_col = rs.column("PLAYER_ID")?;
        let name_col = rs.column("PLAYER")?;
        let height_col = rs.column("HEIGHT")?;
        let team_col = rs.optional_column("TeamID");

        Ok(rs
            .row_set
            .iter()
            .filter_map(|row| {
                let player_id = row.get(id_col).and_then(value_as_u64)?;
                let row_team = team_col
                    .and_then(|c| row.get(c))
                    .and_then(value_as_u64)
                    .map(TeamId::new)
                    .unwrap_or(team_id);
                Some(Self {
                    player_id: PlayerId::new(player_id),
                    player_name: row.get(name_col).map(value_as_string).unwrap_or_default(),
                    team_id: row_team,
                    height: row.get(height_col).and_then(value_as_text),
                })
            })
            .collect())
    }

    /// Parse the league-wide `LeagueDashPlayerBioStats` result set.
    ///
    /// Falls back to `PLAYER_HEIGHT_INCHES` when the text column is blank.
    pub fn from_player_bios(rs: &ResultSet) -> Result<Vec<Self>> {
        let id_col = rs.column("PLAYER_ID")?;
        let name_col = rs.column("PLAYER_NAME")?;
        let team_col = rs.column("TEAM_ID")?;
        let height_col = rs.optional_column("PLAYER_HEIGHT");
        let inches_col = rs.optional_column("PLAYER_HEIGHT_INCHES");

        Ok(rs
            .row_set
            .iter()
            .filter_map(|row| {
                let player_id = row.get(id_col).and_then(value_as_u64)?;
                let height = height_col
                    .and_then(|c| row.get(c))
                    .and_then(value_as_text)
                    .or_else(|| {
                        inches_col
                            .and_then(|c| row.get(c))
                            .and_then(value_as_u64)
                            .map(|inches| format!("{}-{}", inches / 12, inches % 12))
                    });
                Some(Self {
                    player_id: PlayerId::new(player_id),
                    player_name: row.get(name_col).map(value_as_string).unwrap_or_default(),
                    team_id: TeamId::new(row.get(team_col).and_then(value_as_u64).unwrap_or(0)),
                    height,
                })
            })
            .collect())
    }
}

/// Season totals for one player on one team.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerSeasonTotals {
    pub player_id: PlayerId,
    pub player_name: String,
    /// Total minutes played.
    pub minutes: f64,
}

impl PlayerSeasonTotals {
    /// Parse the `PlayersSeasonTotals` result set. Missing minutes count as zero.
    pub fn from_result_set(rs: &ResultSet) -> Result<Vec<Self>> {
        let id_col = rs.column("PLAYER_ID")?;
        let name_col = rs.column("PLAYER_NAME")?;
        let min_col = rs.column("MIN")?;

        Ok(rs
            .row_set
            .iter()
            .filter_map(|row| {
                let player_id = row.get(id_col).and_then(value_as_u64)?;
                Some(Self {
                    player_id: PlayerId::new(player_id),
                    player_name: row.get(name_col).map(value_as_string).unwrap_or_default(),
                    minutes: row.get(min_col).and_then(value_as_f64).unwrap_or(0.0),
                })
            })
            .collect())
    }
}

fn value_as_u64(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Non-empty string cell.
fn value_as_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn value_as_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
