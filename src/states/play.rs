//! Active gameplay
//!
//! Owns the bird, a fixed pool of tubes and two scrolling ground tiles. The
//! camera follows the bird; tubes that leave the left edge of the screen are
//! moved ahead of the pool.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::menu::BACKGROUND_TEXTURE;
use super::{Context, State, StateKind, Trigger};
use crate::consts::{HEIGHT, WIDTH};
use crate::error::GameError;
use crate::platform::{RenderSurface, Texture};
use crate::sim::{Bird, Camera, TUBE_WIDTH, Tube, TubeTextures};

/// Horizontal space between neighbouring tubes
pub const TUBE_SPACING: f32 = 125.0;
/// Size of the tube pool
pub const TUBE_COUNT: usize = 4;
/// Ground tiles sit partly below the screen
pub const GROUND_Y_OFFSET: f32 = -50.0;
pub const GROUND_TEXTURE: &str = "ground.png";

const BIRD_START: Vec2 = Vec2::new(50.0, 300.0);
/// How far ahead of the camera centre the bird flies
const CAMERA_LEAD: f32 = 80.0;

pub struct PlayState {
    camera: Camera,
    bird: Bird,
    tubes: Vec<Tube>,
    background: Texture,
    ground: Texture,
    ground_pos: [Vec2; 2],
    rng: Pcg32,
    score: u32,
}

impl PlayState {
    pub fn new(ctx: &mut Context<'_>) -> Result<Self, GameError> {
        let assets = ctx.assets;
        let mut rng = Pcg32::seed_from_u64(ctx.rng.random());
        let camera = Camera::ortho(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0);

        let ground = assets.texture(GROUND_TEXTURE)?;
        let ground_pos = [
            Vec2::new(camera.left(), GROUND_Y_OFFSET),
            Vec2::new(camera.left() + ground.width() as f32, GROUND_Y_OFFSET),
        ];

        let tube_textures = TubeTextures::load(assets)?;
        let tubes = (1..=TUBE_COUNT)
            .map(|i| Tube::new(i as f32 * (TUBE_SPACING + TUBE_WIDTH), &tube_textures, &mut rng))
            .collect();

        log::info!("New run");
        Ok(Self {
            camera,
            bird: Bird::new(BIRD_START.x, BIRD_START.y, assets)?,
            tubes,
            background: assets.texture(BACKGROUND_TEXTURE)?,
            ground,
            ground_pos,
            rng,
            score: 0,
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Leapfrog ground tiles that scrolled off the left edge
    fn update_ground(&mut self) {
        let width = self.ground.width() as f32;
        for pos in &mut self.ground_pos {
            if self.camera.left() > pos.x + width {
                pos.x += width * 2.0;
            }
        }
    }

    /// Altitude at which the bird touches the ground tiles
    fn ground_level(&self) -> f32 {
        self.ground.height() as f32 + GROUND_Y_OFFSET
    }

    /// End the run, recording its score
    fn finish(&mut self, ctx: &mut Context<'_>, trigger: Trigger) -> Option<Trigger> {
        let new_best = ctx.scores.record(self.score);
        log::info!(
            "Run over ({:?}) with score {}{}",
            trigger,
            self.score,
            if new_best { ", new best" } else { "" }
        );
        Some(trigger)
    }
}

impl State for PlayState {
    fn kind(&self) -> StateKind {
        StateKind::Play
    }

    fn handle_input(&mut self, ctx: &mut Context<'_>) -> Option<Trigger> {
        if ctx.input.pause_pressed() {
            return Some(Trigger::Pause);
        }
        if ctx.input.just_touched() {
            self.bird.jump(ctx.audio);
        }
        None
    }

    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> Result<Option<Trigger>, GameError> {
        if let Some(trigger) = self.handle_input(ctx) {
            return Ok(Some(trigger));
        }

        self.update_ground();
        self.bird.update(dt)?;
        self.camera.position.x = self.bird.position().x + CAMERA_LEAD;

        let bird_box = *self.bird.bounds();
        let stride = (TUBE_WIDTH + TUBE_SPACING) * TUBE_COUNT as f32;
        let mut crashed = false;

        for tube in &mut self.tubes {
            if self.camera.left() > tube.right() {
                let x = tube.pos_top().x + stride;
                log::debug!("Recycling tube at {:.0} -> {:.0}", tube.pos_top().x, x);
                tube.reposition(x, &mut self.rng);
            }

            if bird_box.x > tube.right() && tube.pass() {
                self.score += 1;
                log::debug!("Score {}", self.score);
            }

            if tube.collides(&bird_box) {
                crashed = true;
            }
        }

        if crashed {
            return Ok(self.finish(ctx, Trigger::Collision));
        }
        if self.bird.position().y <= self.ground_level() {
            return Ok(self.finish(ctx, Trigger::OutOfBounds));
        }
        Ok(None)
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        let cam = &self.camera;
        surface.begin(cam);
        surface.draw(&self.background, cam.left(), 0.0);

        let bird = self.bird.position();
        surface.draw_region(self.bird.texture(), bird.x, bird.y);

        for tube in &self.tubes {
            let top = tube.pos_top();
            let bottom = tube.pos_bottom();
            surface.draw(tube.top_texture(), top.x, top.y);
            surface.draw(tube.bottom_texture(), bottom.x, bottom.y);
        }

        for pos in &self.ground_pos {
            surface.draw(&self.ground, pos.x, pos.y);
        }

        surface.draw_text(&self.score.to_string(), cam.position.x, cam.viewport.y - 40.0);
        surface.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioManager;
    use crate::highscores::HighScore;
    use crate::platform::Assets;
    use crate::platform::headless::{DrawCall, HeadlessAssets, RecordingAudio, RecordingSurface, ScriptedInput};
    use crate::sim::JUMP_VELOCITY;
    use std::rc::Rc;

    const DT: f32 = 1.0 / 60.0;

    struct Harness {
        input: ScriptedInput,
        assets: Assets,
        player: Rc<RecordingAudio>,
        audio: AudioManager,
        scores: HighScore,
        rng: Pcg32,
    }

    impl Harness {
        fn new() -> Self {
            let player = Rc::new(RecordingAudio::new());
            Self {
                input: ScriptedInput::new(),
                assets: Assets::new(Rc::new(HeadlessAssets::new())),
                audio: AudioManager::new(player.clone()),
                player,
                scores: HighScore::new(),
                rng: Pcg32::seed_from_u64(2024),
            }
        }

        fn ctx(&mut self) -> Context<'_> {
            Context {
                input: &self.input,
                assets: &self.assets,
                audio: &self.audio,
                scores: &mut self.scores,
                rng: &mut self.rng,
            }
        }
    }

    #[test]
    fn test_initial_layout() {
        let mut h = Harness::new();
        let play = PlayState::new(&mut h.ctx()).unwrap();

        assert_eq!(play.bird().position(), BIRD_START);
        assert_eq!(play.tubes().len(), TUBE_COUNT);
        for (i, tube) in play.tubes().iter().enumerate() {
            assert_eq!(tube.pos_top().x, (i + 1) as f32 * 177.0);
        }
        assert_eq!(play.ground_pos[0], Vec2::new(0.0, GROUND_Y_OFFSET));
        assert_eq!(play.ground_pos[1], Vec2::new(336.0, GROUND_Y_OFFSET));
    }

    #[test]
    fn test_tap_makes_bird_jump() {
        let mut h = Harness::new();
        let mut play = PlayState::new(&mut h.ctx()).unwrap();
        h.input.tap();
        let trigger = play.update(DT, &mut h.ctx()).unwrap();

        assert_eq!(trigger, None);
        // Jump overwrote velocity, then one frame of gravity
        let vy = play.bird().velocity().y;
        assert!((vy - (JUMP_VELOCITY - 15.0)).abs() < 1e-2);
        assert_eq!(h.player.played().len(), 1);
    }

    #[test]
    fn test_camera_follows_bird() {
        let mut h = Harness::new();
        let mut play = PlayState::new(&mut h.ctx()).unwrap();
        play.update(DT, &mut h.ctx()).unwrap();
        assert_eq!(play.camera().position.x, play.bird().position().x + CAMERA_LEAD);
    }

    #[test]
    fn test_falling_bird_hits_ground() {
        let mut h = Harness::new();
        let mut play = PlayState::new(&mut h.ctx()).unwrap();

        let mut trigger = None;
        for _ in 0..600 {
            trigger = play.update(DT, &mut h.ctx()).unwrap();
            if trigger.is_some() {
                break;
            }
        }
        assert_eq!(trigger, Some(Trigger::OutOfBounds));
        assert!(play.bird().position().y <= play.ground_level());
        assert_eq!(h.scores.games_played, 1);
        assert_eq!(h.scores.last, 0);
    }

    #[test]
    fn test_pause_skips_simulation() {
        let mut h = Harness::new();
        let mut play = PlayState::new(&mut h.ctx()).unwrap();
        h.input.press_pause();
        let before = play.bird().position();

        let trigger = play.update(DT, &mut h.ctx()).unwrap();
        assert_eq!(trigger, Some(Trigger::Pause));
        assert_eq!(play.bird().position(), before);
    }

    #[test]
    fn test_tube_collision_ends_run() {
        let mut h = Harness::new();
        let mut play = PlayState::new(&mut h.ctx()).unwrap();
        // Move the first tube onto the bird and put the bird inside its top pipe
        let bird_x = play.bird().position().x;
        play.tubes[0].reposition(bird_x, &mut play.rng);
        let inside_top = play.tubes[0].pos_top().y + 10.0;
        play.bird.place(Vec2::new(bird_x, inside_top));

        let trigger = play.update(DT, &mut h.ctx()).unwrap();
        assert_eq!(trigger, Some(Trigger::Collision));
        assert_eq!(h.scores.games_played, 1);
    }

    #[test]
    fn test_bird_in_gap_keeps_flying() {
        let mut h = Harness::new();
        let mut play = PlayState::new(&mut h.ctx()).unwrap();
        let bird_x = play.bird().position().x;
        play.tubes[0].reposition(bird_x, &mut play.rng);
        let in_gap = play.tubes[0].pos_top().y - 60.0;
        play.bird.place(Vec2::new(bird_x, in_gap));

        assert_eq!(play.update(DT, &mut h.ctx()).unwrap(), None);
    }

    #[test]
    fn test_passing_tubes_scores_and_recycles() {
        let mut h = Harness::new();
        let mut play = PlayState::new(&mut h.ctx()).unwrap();

        // Fly the bird through the gaps by steering its altitude directly
        for _ in 0..(60 * 20) {
            let target = play
                .tubes()
                .iter()
                .filter(|t| t.right() >= play.bird().position().x)
                .min_by(|a, b| a.pos_top().x.total_cmp(&b.pos_top().x))
                .map(|t| t.pos_top().y - 60.0)
                .unwrap_or(300.0);
            let x = play.bird().position().x;
            play.bird.place(Vec2::new(x, target));

            let trigger = play.update(DT, &mut h.ctx()).unwrap();
            assert_eq!(trigger, None);
        }

        // 20 s at 100 units/s covers 2000 units: many tubes, all recycled ahead
        assert!(play.score() >= 8, "score {}", play.score());
        let cam_left = play.camera().left();
        assert!(play.tubes().iter().all(|t| t.right() >= cam_left));
        // Ground is leapfrogged before the camera moves, so it may trail by a frame
        let slack = crate::sim::MOVEMENT * DT;
        assert!(play.ground_pos.iter().all(|g| g.x + 336.0 + slack >= cam_left));
    }

    #[test]
    fn test_render_draws_every_object() {
        let mut h = Harness::new();
        let play = PlayState::new(&mut h.ctx()).unwrap();
        let mut surface = RecordingSurface::new();
        play.render(&mut surface);

        assert_eq!(surface.draws_of("bg.png"), 1);
        assert_eq!(surface.draws_of("birdAnimation.png"), 1);
        assert_eq!(surface.draws_of("topTube.png"), TUBE_COUNT);
        assert_eq!(surface.draws_of("bottomTube.png"), TUBE_COUNT);
        assert_eq!(surface.draws_of("ground.png"), 2);
        assert_eq!(surface.texts(), vec!["0"]);
    }

    fn bird_src_x(surface: &RecordingSurface) -> Option<u32> {
        surface.calls.iter().find_map(|c| match c {
            DrawCall::Region { name, src_x, .. } if name == "birdAnimation.png" => Some(*src_x),
            _ => None,
        })
    }

    #[test]
    fn test_bird_sprite_follows_animation() {
        let mut h = Harness::new();
        let mut play = PlayState::new(&mut h.ctx()).unwrap();
        let mut surface = RecordingSurface::new();
        play.render(&mut surface);
        assert_eq!(bird_src_x(&surface), Some(0));

        let frame_time = play.bird().animation().frame_time();
        let mut elapsed = 0.0;
        while elapsed <= frame_time {
            assert_eq!(play.update(DT, &mut h.ctx()).unwrap(), None);
            elapsed += DT;
        }

        surface.clear();
        play.render(&mut surface);
        // 102px strip, three frames
        assert_eq!(bird_src_x(&surface), Some(34));
    }
}
