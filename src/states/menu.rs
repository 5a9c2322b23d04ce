//! Title screen
//!
//! Start-up state and the one returned to after a lost run. A single touch
//! starts the game.

use super::{Context, State, StateKind, Trigger};
use crate::consts::{HEIGHT, WIDTH};
use crate::error::GameError;
use crate::platform::{Assets, RenderSurface, Texture};
use crate::sim::Camera;

pub const BACKGROUND_TEXTURE: &str = "bg.png";
pub const PLAY_BUTTON_TEXTURE: &str = "playBtn.png";

pub struct MenuState {
    camera: Camera,
    background: Texture,
    play_button: Texture,
    best: u32,
}

impl MenuState {
    pub fn new(assets: &Assets, best: u32) -> Result<Self, GameError> {
        Ok(Self {
            camera: Camera::ortho(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0),
            background: assets.texture(BACKGROUND_TEXTURE)?,
            play_button: assets.texture(PLAY_BUTTON_TEXTURE)?,
            best,
        })
    }
}

impl State for MenuState {
    fn kind(&self) -> StateKind {
        StateKind::Menu
    }

    fn handle_input(&mut self, ctx: &mut Context<'_>) -> Option<Trigger> {
        ctx.input.just_touched().then_some(Trigger::Tap)
    }

    fn update(&mut self, _dt: f32, ctx: &mut Context<'_>) -> Result<Option<Trigger>, GameError> {
        Ok(self.handle_input(ctx))
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        let cam = &self.camera;
        surface.begin(cam);
        surface.draw(&self.background, 0.0, 0.0);
        surface.draw(
            &self.play_button,
            cam.position.x - self.play_button.width() as f32 / 2.0,
            cam.position.y,
        );
        if self.best > 0 {
            surface.draw_text(&format!("BEST {}", self.best), cam.position.x, cam.position.y - 40.0);
        }
        surface.end();
    }
}
