//! Strictly 2048 - terminal game and headless autoplay.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_2048_tui::{AutoplaySettings, Cli, Command, GameConfig, autoplay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play {
            seed,
            best_score_path,
        } => run_tui(config.with_overrides(seed, best_score_path)).await,
        Command::Auto {
            games,
            seed,
            policy,
            continues,
            max_moves,
        } => {
            run_auto(AutoplaySettings::new(games, seed, policy, continues, max_moves));
            Ok(())
        }
    }
}

/// Runs headless games and prints the summary.
fn run_auto(settings: AutoplaySettings) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(?settings, "Starting headless autoplay");
    let summaries = autoplay::run(settings);
    print!("{}", autoplay::report(&settings, &summaries));
}
