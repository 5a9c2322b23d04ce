//! Flappy Demo - a side-scrolling arcade game core
//!
//! Core modules:
//! - `sim`: Per-frame simulation (bird physics, tube recycling, collisions)
//! - `states`: Game modes and the state stack that drives them
//! - `platform`: Rendering/input/asset collaborators the core calls into
//! - `audio`: Volume-mixed playback through a host audio backend
//! - `app`: The application object the host calls once per frame

pub mod app;
pub mod audio;
pub mod error;
pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod states;

pub use app::FlappyApp;
pub use error::GameError;
pub use highscores::HighScore;
pub use settings::{Settings, WindowConfig};

/// Game configuration constants
pub mod consts {
    /// Window size handed to the launcher
    pub const WIDTH: u32 = 480;
    pub const HEIGHT: u32 = 800;
    pub const TITLE: &str = "Flappy Bird";

    /// Host frame step used by the headless runner (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Longer frames are clamped so a stall cannot tunnel the bird through a tube
    pub const MAX_FRAME_DT: f32 = 0.1;
}
