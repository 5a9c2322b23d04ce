//! Stack of game states
//!
//! Only the top state receives updates and renders. States below it are
//! suspended, not disposed.

use super::transitions::{self, Action};
use super::{Context, State, StateKind, Trigger, build_state};
use crate::error::GameError;
use crate::platform::RenderSurface;

#[derive(Default)]
pub struct GameStateManager {
    states: Vec<Box<dyn State>>,
}

impl GameStateManager {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Make `state` active, suspending the current top
    pub fn push(&mut self, state: Box<dyn State>) {
        log::info!("Push {:?} (depth {})", state.kind(), self.states.len() + 1);
        self.states.push(state);
    }

    /// Dispose the top state and resume the one beneath.
    ///
    /// The last state cannot be popped; the game always has an active mode.
    pub fn pop(&mut self) -> Result<(), GameError> {
        match self.states.len() {
            0 => Err(GameError::EmptyStateStack),
            1 => Err(GameError::WouldEmptyStack),
            _ => {
                if let Some(state) = self.states.pop() {
                    log::info!("Pop {:?}", state.kind());
                    state.dispose();
                }
                Ok(())
            }
        }
    }

    /// Dispose the top state and install `state` in its place
    pub fn set(&mut self, state: Box<dyn State>) -> Result<(), GameError> {
        let old = self.states.pop().ok_or(GameError::EmptyStateStack)?;
        log::info!("Set {:?} -> {:?}", old.kind(), state.kind());
        old.dispose();
        self.states.push(state);
        Ok(())
    }

    /// Update the active state and apply any transition it triggers
    pub fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> Result<(), GameError> {
        let top = self.states.last_mut().ok_or(GameError::EmptyStateStack)?;
        let from = top.kind();

        if let Some(trigger) = top.update(dt, ctx)? {
            self.fire(from, trigger, ctx)?;
        }
        Ok(())
    }

    pub fn render(&self, surface: &mut dyn RenderSurface) -> Result<(), GameError> {
        let top = self.states.last().ok_or(GameError::EmptyStateStack)?;
        top.render(surface);
        Ok(())
    }

    /// Look up and apply the transition for `trigger` raised by `from`
    fn fire(&mut self, from: StateKind, trigger: Trigger, ctx: &mut Context<'_>) -> Result<(), GameError> {
        match transitions::lookup(from, trigger) {
            Some(action) => self.apply(action, ctx),
            None => {
                log::debug!("No transition for {:?} on {:?}", from, trigger);
                Ok(())
            }
        }
    }

    /// Perform a stack action. New states are built before the old top is
    /// touched, so a failed asset load leaves the stack as it was.
    pub fn apply(&mut self, action: Action, ctx: &mut Context<'_>) -> Result<(), GameError> {
        match action {
            Action::Set(kind) => {
                let next = build_state(kind, ctx)?;
                self.set(next)
            }
            Action::Push(kind) => {
                let next = build_state(kind, ctx)?;
                self.push(next);
                Ok(())
            }
            Action::Pop => self.pop(),
        }
    }

    /// Dispose every state, top first
    pub fn clear(&mut self) {
        while let Some(state) = self.states.pop() {
            state.dispose();
        }
    }

    pub fn active_kind(&self) -> Option<StateKind> {
        self.states.last().map(|s| s.kind())
    }

    /// Kinds from bottom to top
    pub fn kinds(&self) -> Vec<StateKind> {
        self.states.iter().map(|s| s.kind()).collect()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
