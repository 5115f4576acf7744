//! Command-line interface for strictly_2048.

use crate::autoplay::Policy;
use crate::config::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly 2048 - sliding-tile puzzle in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_2048")]
#[command(about = "Play 2048 in the terminal or run headless games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively
    Play {
        /// RNG seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Best score file (overrides the config file)
        #[arg(long)]
        best_score_path: Option<PathBuf>,
    },

    /// Run headless games with a fixed policy
    Auto {
        /// Number of games
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Seed of the first game
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Move policy
        #[arg(short, long, value_enum, default_value = "cycle")]
        policy: Policy,

        /// Rewinds allowed per game
        #[arg(long, default_value = "0")]
        continues: u32,

        /// Move cap per game (0 = unlimited)
        #[arg(long, default_value = "10000")]
        max_moves: u32,
    },
}
