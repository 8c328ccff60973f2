//! Season keys: end-years and the `"1979-80"` labels the stats API expects.

use crate::error::{HeightsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First season end-year tracked by default (the 1979-80 season).
pub const DEFAULT_START_END_YEAR: u16 = 1980;

/// Map a season end-year to its stats.nba.com season label.
///
/// `1980` becomes `"1979-80"` and `2000` becomes `"1999-00"`. No range
/// validation is done; callers pass years within league history.
pub fn season_label(end_year: u16) -> String {
    format!("{}-{:02}", end_year.saturating_sub(1), end_year % 100)
}

/// Type-safe wrapper for a season's end-year.
///
/// The 1979-80 season has end-year 1980.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EndYear(pub u16);

impl EndYear {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Season label for the stats API, e.g. `"1979-80"`.
    pub fn season_label(&self) -> String {
        season_label(self.0)
    }
}

impl Default for EndYear {
    fn default() -> Self {
        Self(DEFAULT_START_END_YEAR)
    }
}

impl fmt::Display for EndYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EndYear {
    type Err = HeightsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
