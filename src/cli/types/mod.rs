//! Type-safe wrappers for NBA stats identifiers and season keys.

pub mod ids;
pub mod time;


pub use ids::{PlayerId, TeamId};
pub use time::{season_label, EndYear, DEFAULT_START_END_YEAR};
