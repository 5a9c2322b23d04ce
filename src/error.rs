//! Crate-wide error type
//!
//! Every precondition the game loop relies on (positive timestep, non-empty
//! animation strips, a live state on the stack, resolvable assets) surfaces
//! here instead of faulting deep inside a frame.

use std::fmt;

#[derive(Debug)]
pub enum GameError {
    /// Frame delta was zero, negative or not finite
    InvalidTimestep(f32),
    /// An animation was built from zero frames
    NoAnimationFrames,
    /// Delegation or pop attempted with no state on the stack
    EmptyStateStack,
    /// Pop would remove the last remaining state
    WouldEmptyStack,
    /// A named asset could not be resolved by the backend
    Asset { name: String, reason: String },
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidTimestep(dt) => write!(f, "invalid frame timestep: {dt}"),
            GameError::NoAnimationFrames => write!(f, "animation requires at least one frame"),
            GameError::EmptyStateStack => write!(f, "state stack is empty"),
            GameError::WouldEmptyStack => write!(f, "refusing to pop the last game state"),
            GameError::Asset { name, reason } => write!(f, "failed to load asset '{name}': {reason}"),
            GameError::Io(err) => write!(f, "io error: {err}"),
            GameError::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(err) => Some(err),
            GameError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Json(err)
    }
}

/// Reject timesteps the integrator cannot divide by
pub fn check_timestep(dt: f32) -> Result<(), GameError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidTimestep(dt))
    }
}
