//! End-of-run screen
//!
//! Shows the score of the run that just ended next to the best one. A touch
//! goes back to the menu.

use super::menu::BACKGROUND_TEXTURE;
use super::{Context, State, StateKind, Trigger};
use crate::consts::{HEIGHT, WIDTH};
use crate::error::GameError;
use crate::highscores::HighScore;
use crate::platform::{Assets, RenderSurface, Texture};
use crate::sim::Camera;

pub const GAME_OVER_TEXTURE: &str = "gameover.png";

pub struct GameOverState {
    camera: Camera,
    background: Texture,
    banner: Texture,
    score: u32,
    best: u32,
    new_best: bool,
}

impl GameOverState {
    pub fn new(assets: &Assets, scores: &HighScore) -> Result<Self, GameError> {
        Ok(Self {
            camera: Camera::ortho(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0),
            background: assets.texture(BACKGROUND_TEXTURE)?,
            banner: assets.texture(GAME_OVER_TEXTURE)?,
            score: scores.last,
            best: scores.best,
            new_best: scores.last_was_best,
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The run that just ended set the record
    pub fn is_new_best(&self) -> bool {
        self.new_best
    }
}

impl State for GameOverState {
    fn kind(&self) -> StateKind {
        StateKind::GameOver
    }

    fn handle_input(&mut self, ctx: &mut Context<'_>) -> Option<Trigger> {
        ctx.input.just_touched().then_some(Trigger::Tap)
    }

    fn update(&mut self, _dt: f32, ctx: &mut Context<'_>) -> Result<Option<Trigger>, GameError> {
        Ok(self.handle_input(ctx))
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        let cam = &self.camera;
        let x = cam.position.x;
        surface.begin(cam);
        surface.draw(&self.background, 0.0, 0.0);
        surface.draw(&self.banner, x - self.banner.width() as f32 / 2.0, cam.position.y + 60.0);
        surface.draw_text(&format!("SCORE {}", self.score), x, cam.position.y);
        surface.draw_text(&format!("BEST {}", self.best), x, cam.position.y - 30.0);
        if self.is_new_best() {
            surface.draw_text("NEW BEST!", x, cam.position.y - 60.0);
        }
        surface.end();
    }
}
