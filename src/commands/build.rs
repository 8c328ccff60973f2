//! Full pipeline: every season in range, then the CSV and the chart.

use std::sync::Arc;

use crate::analysis::{SeasonSummary, SummaryBuilder};
use crate::cli::types::EndYear;
use crate::config::Config;
use crate::nba::{ChampionTable, StatsSource};
use crate::report::{latest_complete, render_chart, summary_line, write_csv};
use crate::Result;

/// Build the season table described by `config` and write its outputs.
///
/// Per-season fetch problems are logged and leave gaps in the table; only
/// failing to write the CSV or the chart is an error.
pub async fn handle_build(source: Arc<dyn StatsSource>, config: &Config) -> Result<SeasonSummary> {
    let builder = SummaryBuilder::new(source, ChampionTable::nba(), config);

    println!(
        "Building season table from {} (cache: {})",
        EndYear::new(config.start_year).season_label(),
        config.cache_dir.display()
    );
    let summary = builder.build_summary(EndYear::new(config.start_year)).await;

    let csv_path = config.summary_csv_path();
    write_csv(&summary.rows, &csv_path)?;
    println!("Saved data: {}", csv_path.display());

    if config.render_chart {
        let chart_path = config.chart_path();
        render_chart(&summary.rows, &chart_path)?;
        println!("Saved chart: {}", chart_path.display());
    }

    println!(
        "{} seasons ({} from cache), champion averages: {}",
        summary.rows.len(),
        summary.cached_seasons,
        summary.champion_outcomes
    );
    match latest_complete(&summary.rows) {
        Some(row) => println!("{}", summary_line(row)),
        None => println!("No season has complete height data"),
    }

    Ok(summary)
}
