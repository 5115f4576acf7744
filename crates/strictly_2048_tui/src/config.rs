//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_2048.toml";

/// Settings for the terminal front end.
///
/// Every field has a default, so an empty file or no file at all is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Where the best score is persisted.
    #[serde(default = "default_best_score_path")]
    best_score_path: PathBuf,

    /// How long merged-away tiles linger before disposal, in milliseconds.
    #[serde(default = "default_dispose_delay_ms")]
    dispose_delay_ms: u64,

    /// Fixed RNG seed; entropy is used when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_best_score_path() -> PathBuf {
    PathBuf::from("strictly_2048_best.txt")
}

fn default_dispose_delay_ms() -> u64 {
    220
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            best_score_path: default_best_score_path(),
            dispose_delay_ms: default_dispose_delay_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(
            best_score_path = %config.best_score_path.display(),
            dispose_delay_ms = config.dispose_delay_ms,
            seed = ?config.seed,
            "Config loaded"
        );
        Ok(config)
    }

    /// Loads the file if it exists, defaults otherwise.
    ///
    /// A file that exists but cannot be parsed is still an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(mut self, seed: Option<u64>, best_score_path: Option<PathBuf>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(path) = best_score_path {
            self.best_score_path = path;
        }
        self
    }

    /// Disposal delay as a [`Duration`].
    pub fn dispose_delay(&self) -> Duration {
        Duration::from_millis(self.dispose_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
