//! Pause overlay, pushed on top of a running game

use super::{Context, State, StateKind, Trigger};
use crate::consts::{HEIGHT, WIDTH};
use crate::error::GameError;
use crate::platform::{Assets, RenderSurface, Texture};
use crate::sim::Camera;

pub const PAUSE_TEXTURE: &str = "pause.png";

pub struct PausedState {
    camera: Camera,
    banner: Texture,
}

impl PausedState {
    pub fn new(assets: &Assets) -> Result<Self, GameError> {
        Ok(Self {
            camera: Camera::ortho(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0),
            banner: assets.texture(PAUSE_TEXTURE)?,
        })
    }
}

impl State for PausedState {
    fn kind(&self) -> StateKind {
        StateKind::Paused
    }

    fn handle_input(&mut self, ctx: &mut Context<'_>) -> Option<Trigger> {
        if ctx.input.pause_pressed() {
            Some(Trigger::Pause)
        } else if ctx.input.just_touched() {
            Some(Trigger::Tap)
        } else {
            None
        }
    }

    fn update(&mut self, _dt: f32, ctx: &mut Context<'_>) -> Result<Option<Trigger>, GameError> {
        Ok(self.handle_input(ctx))
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        let cam = &self.camera;
        surface.begin(cam);
        surface.draw(
            &self.banner,
            cam.position.x - self.banner.width() as f32 / 2.0,
            cam.position.y,
        );
        surface.draw_text("TAP TO RESUME", cam.position.x, cam.position.y - 30.0);
        surface.end();
    }
}
