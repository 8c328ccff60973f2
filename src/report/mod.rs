//! Output for a finished summary
//!
//! - `table`: the per-season CSV
//! - `chart`: SVG line chart of the height series
//! - latest-season summary line for the terminal

pub mod chart;
pub mod table;

pub use chart::render_chart;
pub use table::{read_csv, write_csv};

use crate::analysis::SeasonSummaryRow;
use crate::nba::format_height;

/// Most recent row with both league average and tallest present.
pub fn latest_complete(rows: &[SeasonSummaryRow]) -> Option<&SeasonSummaryRow> {
    rows.iter()
        .filter(|r| r.is_complete())
        .max_by_key(|r| r.season_end_year)
}

/// One-line description of a season, heights in feet and inches.
pub fn summary_line(row: &SeasonSummaryRow) -> String {
    format!(
        "Latest included season ({} / {}): avg={}, tallest={}, champion starters={}, players={}",
        row.season_end_year,
        row.season,
        format_height(row.avg_height_in),
        format_height(row.tallest_height_in),
        format_height(row.champ_starter_avg),
        row.n_players
    )
}
