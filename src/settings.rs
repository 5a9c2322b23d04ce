//! Game settings and preferences
//!
//! Stored as JSON next to the executable's working directory. Missing or
//! unreadable files fall back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{HEIGHT, TITLE, WIDTH};
use crate::error::GameError;

/// Window parameters handed to the host launcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            title: TITLE.to_string(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowConfig,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Simulation ===
    /// Fixed RNG seed for reproducible tube layouts (random when absent)
    pub seed: Option<u64>,

    // === Headless runner ===
    /// Frames simulated by the native binary
    pub demo_frames: u32,
    /// Frames between scripted taps
    pub demo_tap_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),

            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 0.1,
            muted: false,

            seed: None,

            demo_frames: 60 * 30,
            demo_tap_interval: 24,
        }
    }
}

impl Settings {
    /// Clamp out-of-range values from hand-edited files
    pub fn sanitize(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self.demo_tap_interval = self.demo_tap_interval.max(1);
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("Using default settings");
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(mut settings) => {
                settings.sanitize();
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
