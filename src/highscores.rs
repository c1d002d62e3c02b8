//! High score file
//!
//! Plain text holding a single non-negative integer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::persistence;

/// Handle to the high score file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the stored score; errors when the file is unreadable or not a number
    pub fn try_load(&self) -> Result<Option<u32>> {
        let Some(text) = persistence::read_optional(&self.path)? else {
            return Ok(None);
        };
        let score = text
            .trim()
            .parse::<u32>()
            .with_context(|| format!("parsing high score in {}", self.path.display()))?;
        Ok(Some(score))
    }

    /// Stored high score, 0 when missing or unreadable
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(Some(score)) => {
                log::info!("Loaded high score {}", score);
                score
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Ignoring high score file: {:#}", e);
                0
            }
        }
    }

    /// Overwrite the file; failures are logged and reported as `false`
    pub fn save(&self, score: u32) -> bool {
        match persistence::write_atomic(&self.path, &score.to_string()) {
            Ok(()) => {
                log::info!("High score saved ({})", score);
                true
            }
            Err(e) => {
                log::error!("Error saving high score: {:#}", e);
                false
            }
        }
    }
}
