//! State transition table

use super::{StateKind, Trigger};

/// What the manager does with its stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Replace the top state
    Set(StateKind),
    /// Suspend the top state under a new one
    Push(StateKind),
    /// Drop the top state, resuming the one beneath
    Pop,
}

/// Every legal transition. Pairs not listed are ignored.
pub const TRANSITIONS: &[(StateKind, Trigger, Action)] = &[
    (StateKind::Menu, Trigger::Tap, Action::Set(StateKind::Play)),
    (StateKind::Play, Trigger::Collision, Action::Set(StateKind::GameOver)),
    (StateKind::Play, Trigger::OutOfBounds, Action::Set(StateKind::GameOver)),
    (StateKind::Play, Trigger::Pause, Action::Push(StateKind::Paused)),
    (StateKind::Paused, Trigger::Pause, Action::Pop),
    (StateKind::Paused, Trigger::Tap, Action::Pop),
    (StateKind::GameOver, Trigger::Tap, Action::Set(StateKind::Menu)),
];

pub fn lookup(from: StateKind, trigger: Trigger) -> Option<Action> {
    TRANSITIONS
        .iter()
        .find(|(kind, t, _)| *kind == from && *t == trigger)
        .map(|(_, _, action)| *action)
}
