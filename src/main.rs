//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_heights::{
    cli::{Commands, NbaHeights},
    commands::{
        apply_cache_args, build::handle_build, champions::handle_champions, live_source,
        season::handle_season,
    },
    logging::init_logging,
    nba::ChampionTable,
    Config,
};
use std::fs;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = NbaHeights::parse();
    init_logging(app.verbose);

    match app.command {
        Commands::Build {
            start_year,
            end_year,
            out_dir,
            no_chart,
            cache,
        } => {
            let mut config = apply_cache_args(Config::default(), cache);
            config.start_year = start_year.as_u16();
            config.end_year = end_year.map(|y| y.as_u16());
            config.out_dir = out_dir;
            config.render_chart = !no_chart;

            fs::create_dir_all(&config.cache_dir).with_context(|| {
                format!("creating cache directory {}", config.cache_dir.display())
            })?;
            let source = live_source(&config).context("building stats.nba.com client")?;
            handle_build(source, &config)
                .await
                .context("writing season table")?;
        }

        Commands::Season { year, cache } => {
            let config = apply_cache_args(Config::default(), cache);
            let source = live_source(&config).context("building stats.nba.com client")?;
            handle_season(source, &config, year).await?;
        }

        Commands::Champions => handle_champions(&ChampionTable::nba()),
    }

    Ok(())
}
