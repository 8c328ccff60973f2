//! Single-season lookup.

use std::sync::Arc;

use crate::analysis::{SeasonSummaryRow, SummaryBuilder};
use crate::cli::types::EndYear;
use crate::config::Config;
use crate::nba::{format_height, ChampionTable, StatsSource};
use crate::Result;

/// Compute (or load) one season and print it.
pub async fn handle_season(
    source: Arc<dyn StatsSource>,
    config: &Config,
    year: EndYear,
) -> Result<SeasonSummaryRow> {
    let champions = ChampionTable::nba();
    let champion = champions.champion_name(year.as_u16()).map(str::to_string);
    let builder = SummaryBuilder::new(source, champions, config);

    let row = builder.build_season(year).await;

    println!("Season {} ({} players)", row.season, row.n_players);
    println!("  League average:    {}", format_height(row.avg_height_in));
    println!("  Tallest player:    {}", format_height(row.tallest_height_in));
    match champion {
        Some(name) => println!(
            "  Champion starters: {} ({})",
            format_height(row.champ_starter_avg),
            name
        ),
        None => println!("  Champion starters: NA (no champion on record)"),
    }

    Ok(row)
}
