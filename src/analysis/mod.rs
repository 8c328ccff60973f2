//! Season-level computations on top of the stats source
//!
//! - `roster`: per-season deduplicated rosters and their cache
//! - `champion`: champion-starter average heights
//! - `summary`: one row per season across a range of years
//! - `outcome`: per-unit results that never abort a batch

pub mod champion;
pub mod outcome;
pub mod roster;
pub mod summary;

pub use champion::{ChampionAggregator, ChampionAverage, ChampionEvaluation};
pub use outcome::{Outcome, OutcomeCounts};
pub use roster::{PlayerHeightRecord, RosterCache, SeasonRoster};
pub use summary::{SeasonSummary, SeasonSummaryRow, SummaryBuilder};
