//! Strictly 2048 front end
//!
//! Collaborators around the [`strictly_2048`] engine: key bindings, the
//! ratatui renderer, best-score persistence, deferred tile disposal,
//! configuration and a headless autoplayer. None of them make game
//! decisions; they only drive [`strictly_2048::Game`] and read it back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
pub mod autoplay;
mod best_score;
mod cli;
mod config;
mod input;
mod tui;
mod ui;

// Crate-level exports - Application
pub use app::{App, UiEvent};
pub use tui::{LOG_FILE, run_tui};
pub use ui::{draw, tile_color, tile_style};

// Crate-level exports - Input
pub use input::{Action, action_for};

// Crate-level exports - Persistence
pub use best_score::{BestScore, BestScoreError};

// Crate-level exports - Configuration
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Headless play
pub use autoplay::{AutoplaySettings, GameSummary, Policy};
