//! Game modes and the stack that runs them
//!
//! Each mode implements `State`. States never push or pop each other: they
//! report a `Trigger` from `update`, and the manager looks the pair
//! (current kind, trigger) up in the transition table.

pub mod game_over;
pub mod manager;
pub mod menu;
pub mod paused;
pub mod play;
pub mod transitions;

pub use game_over::GameOverState;
pub use manager::GameStateManager;
pub use menu::MenuState;
pub use paused::PausedState;
pub use play::PlayState;
pub use transitions::{Action, TRANSITIONS};

use rand_pcg::Pcg32;

use crate::audio::AudioManager;
use crate::error::GameError;
use crate::highscores::HighScore;
use crate::platform::{Assets, InputSource, RenderSurface};

/// Which mode a state implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Menu,
    Play,
    Paused,
    GameOver,
}

/// Something that happened inside a state and may cause a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Primary touch/click
    Tap,
    /// Pause key
    Pause,
    /// Bird hit a tube
    Collision,
    /// Bird hit the ground
    OutOfBounds,
}

/// Everything a state may touch during a frame
pub struct Context<'a> {
    pub input: &'a dyn InputSource,
    pub assets: &'a Assets,
    pub audio: &'a AudioManager,
    pub scores: &'a mut HighScore,
    pub rng: &'a mut Pcg32,
}

/// A game mode. Resources are acquired in the constructor and released
/// when the state is disposed.
pub trait State {
    fn kind(&self) -> StateKind;

    /// Poll input for this frame
    fn handle_input(&mut self, ctx: &mut Context<'_>) -> Option<Trigger>;

    /// Advance one frame. A returned trigger is fed to the transition table.
    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> Result<Option<Trigger>, GameError>;

    fn render(&self, surface: &mut dyn RenderSurface);

    /// Tear down; owned textures and sounds are released here
    fn dispose(self: Box<Self>) {
        log::debug!("Disposing {:?} state", self.kind());
    }
}

/// Construct the state for `kind`, loading its assets
pub fn build_state(kind: StateKind, ctx: &mut Context<'_>) -> Result<Box<dyn State>, GameError> {
    Ok(match kind {
        StateKind::Menu => Box::new(MenuState::new(ctx.assets, ctx.scores.best)?),
        StateKind::Play => Box::new(PlayState::new(ctx)?),
        StateKind::Paused => Box::new(PausedState::new(ctx.assets)?),
        StateKind::GameOver => Box::new(GameOverState::new(ctx.assets, ctx.scores)?),
    })
}
