//! High score counter
//!
//! The only state that outlives a process: the best score and how many runs
//! ended. Persisted as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    /// Best score ever reached
    pub best: u32,
    /// Score of the most recent run
    #[serde(skip)]
    pub last: u32,
    /// Whether the most recent run beat the previous best
    #[serde(skip)]
    pub last_was_best: bool,
    /// Number of finished runs
    pub games_played: u32,
}

impl HighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record(&mut self, score: u32) -> bool {
        self.last = score;
        self.games_played += 1;
        self.last_was_best = score > self.best;
        if self.last_was_best {
            log::info!("New high score: {} (was {})", score, self.best);
            self.best = score;
        }
        self.last_was_best
    }

    /// Load from `path`, starting fresh when absent or unreadable
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path).map(|json| serde_json::from_str::<HighScore>(&json)) {
            Ok(Ok(scores)) => {
                log::info!("Loaded high score {}", scores.best);
                scores
            }
            Ok(Err(e)) => {
                log::warn!("Ignoring malformed high score file: {}", e);
                Self::new()
            }
            Err(_) => {
                log::info!("No high score found, starting fresh");
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        log::info!("High score saved (best {})", self.best);
        Ok(())
    }
}
