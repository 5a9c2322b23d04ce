//! The player character
//!
//! Falls under gravity, flaps upward on input, and scrolls right at a fixed
//! speed. The ground sits at y = 0.

use std::rc::Rc;

use glam::Vec2;

use super::animation::Animation;
use super::collision::Rect;
use crate::audio::AudioManager;
use crate::error::{GameError, check_timestep};
use crate::platform::{Assets, Region, Sound};

/// Velocity added per update while airborne
pub const GRAVITY: f32 = -15.0;
/// Horizontal scroll speed (units/s)
pub const MOVEMENT: f32 = 100.0;
/// Vertical velocity set by a flap
pub const JUMP_VELOCITY: f32 = 250.0;
/// Loudness of the flap effect before mixing
pub const FLAP_VOLUME: f32 = 0.3;

pub const BIRD_TEXTURE: &str = "birdAnimation.png";
pub const FLAP_SOUND: &str = "sfx_wing.ogg";
const BIRD_FRAMES: usize = 3;
const BIRD_CYCLE_TIME: f32 = 0.5;

#[derive(Debug)]
pub struct Bird {
    position: Vec2,
    velocity: Vec2,
    bounds: Rect,
    animation: Animation,
    flap: Sound,
}

impl Bird {
    /// Load the sprite strip and flap sound, starting at rest at (x, y)
    pub fn new(x: f32, y: f32, assets: &Assets) -> Result<Self, GameError> {
        let texture = Rc::new(assets.texture(BIRD_TEXTURE)?);
        let strip = Region::full(texture);
        let animation = Animation::new(&strip, BIRD_FRAMES, BIRD_CYCLE_TIME)?;
        let frame = animation.frame();
        let bounds = Rect::new(x, y, frame.width as f32, frame.height as f32);

        Ok(Self {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            bounds,
            animation,
            flap: assets.sound(FLAP_SOUND)?,
        })
    }

    /// Integrate one frame.
    ///
    /// Velocity is scaled to a per-frame displacement, applied, then scaled
    /// back, so gravity accumulates per update rather than per second.
    pub fn update(&mut self, dt: f32) -> Result<(), GameError> {
        check_timestep(dt)?;

        self.animation.update(dt);

        if self.position.y > 0.0 {
            self.velocity.y += GRAVITY;
        }

        self.velocity *= dt;
        self.position += Vec2::new(MOVEMENT * dt, self.velocity.y);

        if self.position.y < 0.0 {
            self.position.y = 0.0;
        }

        self.velocity *= 1.0 / dt;

        self.bounds.set_position(self.position);
        Ok(())
    }

    /// Flap: overwrite vertical velocity and play the wing sound
    pub fn jump(&mut self, audio: &AudioManager) {
        self.velocity.y = JUMP_VELOCITY;
        audio.play(&self.flap, FLAP_VOLUME);
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current animation frame
    pub fn texture(&self) -> &Region {
        self.animation.frame()
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Teleport to `position` at rest
    #[cfg(test)]
    pub(crate) fn place(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.bounds.set_position(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::{HeadlessAssets, RecordingAudio};
    use proptest::prelude::*;

    fn assets() -> (Rc<HeadlessAssets>, Assets) {
        let backend = Rc::new(HeadlessAssets::new());
        (backend.clone(), Assets::new(backend))
    }

    fn audio() -> (Rc<RecordingAudio>, AudioManager) {
        let player = Rc::new(RecordingAudio::new());
        (player.clone(), AudioManager::new(player))
    }

    #[test]
    fn test_new_bird_at_rest() {
        let (_, assets) = assets();
        let bird = Bird::new(50.0, 300.0, &assets).unwrap();
        assert_eq!(bird.position(), Vec2::new(50.0, 300.0));
        assert_eq!(bird.velocity(), Vec2::ZERO);
        // One frame of the 102px strip
        assert_eq!(bird.bounds().width, 34.0);
        assert_eq!(bird.bounds().height, 24.0);
    }

    #[test]
    fn test_update_applies_gravity_and_scroll() {
        let (_, assets) = assets();
        let mut bird = Bird::new(50.0, 300.0, &assets).unwrap();
        let dt = 0.1;
        bird.update(dt).unwrap();

        assert!((bird.velocity().y - GRAVITY).abs() < 1e-3);
        assert!((bird.position().x - (50.0 + MOVEMENT * dt)).abs() < 1e-4);
        assert!((bird.position().y - (300.0 + GRAVITY * dt)).abs() < 1e-4);
        assert_eq!(bird.bounds().position(), bird.position());
    }

    #[test]
    fn test_zero_dt_rejected_without_mutation() {
        let (_, assets) = assets();
        let mut bird = Bird::new(50.0, 300.0, &assets).unwrap();
        assert!(matches!(bird.update(0.0), Err(GameError::InvalidTimestep(_))));
        assert_eq!(bird.position(), Vec2::new(50.0, 300.0));
        assert_eq!(bird.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_ground_clamp() {
        let (_, assets) = assets();
        let mut bird = Bird::new(0.0, 1.0, &assets).unwrap();
        for _ in 0..50 {
            bird.update(1.0 / 60.0).unwrap();
            assert!(bird.position().y >= 0.0);
        }
        assert_eq!(bird.position().y, 0.0);
    }

    #[test]
    fn test_no_gravity_on_ground() {
        let (_, assets) = assets();
        let mut bird = Bird::new(0.0, 0.0, &assets).unwrap();
        bird.update(1.0 / 60.0).unwrap();
        assert_eq!(bird.velocity().y, 0.0);
        assert_eq!(bird.position().y, 0.0);
    }

    #[test]
    fn test_jump_overwrites_velocity_and_plays_flap() {
        let (_, assets) = assets();
        let (player, audio) = audio();
        let mut bird = Bird::new(50.0, 300.0, &assets).unwrap();
        for _ in 0..30 {
            bird.update(1.0 / 60.0).unwrap();
        }
        assert!(bird.velocity().y < 0.0);

        bird.jump(&audio);
        assert_eq!(bird.velocity().y, JUMP_VELOCITY);
        bird.jump(&audio);
        assert_eq!(bird.velocity().y, JUMP_VELOCITY);

        let played = player.played();
        assert_eq!(played.len(), 2);
        assert_eq!(played[0].0, FLAP_SOUND);
        assert!((played[0].1 - FLAP_VOLUME).abs() < 1e-6);
    }

    #[test]
    fn test_jump_lifts_bird() {
        let (_, assets) = assets();
        let (_, audio) = audio();
        let mut bird = Bird::new(50.0, 0.0, &assets).unwrap();
        bird.jump(&audio);
        bird.update(1.0 / 60.0).unwrap();
        assert!(bird.position().y > 0.0);
    }

    #[test]
    fn test_dispose_releases_assets() {
        let (backend, assets) = assets();
        let bird = Bird::new(50.0, 300.0, &assets).unwrap();
        assert_eq!(backend.live_textures(), 1);
        assert_eq!(backend.live_sounds(), 1);
        drop(bird);
        assert_eq!(backend.live_textures(), 0);
        assert_eq!(backend.live_sounds(), 0);
    }

    proptest! {
        #[test]
        fn prop_airborne_velocity_decreases(dt in 0.001f32..0.1, start_y in 50.0f32..800.0) {
            let (_, assets) = assets();
            let mut bird = Bird::new(0.0, start_y, &assets).unwrap();
            let mut prev = bird.velocity().y;

            for _ in 0..2000 {
                let airborne = bird.position().y > 0.0;
                bird.update(dt).unwrap();
                prop_assert!(bird.position().y >= 0.0);
                if !airborne {
                    break;
                }
                prop_assert!(bird.velocity().y < prev);
                prev = bird.velocity().y;
            }
        }

        #[test]
        fn prop_jump_is_overwrite(prior in -5000.0f32..5000.0, frames in 0usize..20) {
            let (_, assets) = assets();
            let (_, audio) = audio();
            let mut bird = Bird::new(0.0, 400.0, &assets).unwrap();
            bird.velocity.y = prior;
            for _ in 0..frames {
                bird.update(1.0 / 60.0).unwrap();
            }
            bird.jump(&audio);
            prop_assert_eq!(bird.velocity().y, JUMP_VELOCITY);
        }
    }
}
