//! Best-score persistence in a plain-text file.

use derive_more::{Display, Error};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Best score error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Best score error: {} at {}:{}", message, file, line)]
pub struct BestScoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BestScoreError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for BestScoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("IO error: {}", err))
    }
}

impl From<std::num::ParseIntError> for BestScoreError {
    #[track_caller]
    fn from(err: std::num::ParseIntError) -> Self {
        Self::new(format!("Corrupt best score: {}", err))
    }
}

/// Highest score seen, written through to disk whenever it is beaten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestScore {
    path: PathBuf,
    best: u32,
}

impl BestScore {
    /// Loads the best score; a missing file counts as zero.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BestScoreError> {
        let path = path.as_ref().to_path_buf();
        let best = match std::fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => 0,
            Ok(text) => text.trim().parse()?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No best score file yet");
                0
            }
            Err(e) => return Err(e.into()),
        };
        info!(best, "Best score loaded");
        Ok(Self { path, best })
    }

    /// Current best score.
    pub fn best(&self) -> u32 {
        self.best
    }

    /// File the score is persisted to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records a score, persisting it when it beats the best.
    ///
    /// Returns whether the best changed.
    #[instrument(skip(self), fields(best = self.best))]
    pub fn record(&mut self, score: u32) -> Result<bool, BestScoreError> {
        if score <= self.best {
            return Ok(false);
        }
        std::fs::write(&self.path, score.to_string())?;
        self.best = score;
        debug!(best = score, "New best score saved");
        Ok(true)
    }
}
