//! Per-frame simulation
//!
//! Gravity integration, obstacle recycling and rectangle collision. Nothing in
//! here draws; the states decide what to render from these types.
//! - Variable frame timestep supplied by the host (must be > 0)
//! - Seeded RNG passed in by the owner
//! - Actors own their asset handles; dropping an actor releases them

pub mod animation;
pub mod bird;
pub mod camera;
pub mod collision;
pub mod tube;

pub use animation::Animation;
pub use bird::{Bird, GRAVITY, JUMP_VELOCITY, MOVEMENT};
pub use camera::Camera;
pub use collision::Rect;
pub use tube::{FLUCTUATION, LOWEST_OPENING, TUBE_GAP, TUBE_WIDTH, Tube, TubeTextures};
