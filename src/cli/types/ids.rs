//! ID types for NBA stats entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for stats.nba.com player IDs.
///
/// Player IDs are stable across seasons and teams, which makes them the
/// deduplication key when a traded player shows up on two rosters.
///
/// # Examples
///
/// ```rust
/// use nba_heights::PlayerId;
///
/// let player_id = PlayerId::new(77142);
/// assert_eq!(player_id.as_u64(), 77142);
/// assert_eq!(player_id.to_string(), "77142");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for stats.nba.com team IDs (e.g. `1610612747`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u64);

impl TeamId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
