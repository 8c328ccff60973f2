//! Built-in champion table.

use crate::cli::types::season_label;
use crate::nba::ChampionTable;

/// Print one line per season, oldest first.
pub fn handle_champions(table: &ChampionTable) {
    if let Some((first, last)) = table.coverage() {
        println!(
            "{} champions, {} through {}",
            table.len(),
            season_label(first),
            season_label(last)
        );
    }
    for (year, name) in table.iter() {
        println!("{}  {}", season_label(year), name);
    }
}
