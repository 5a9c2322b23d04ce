//! Tube obstacles
//!
//! Each `Tube` is a pair: one pipe hanging from the top and one rising from
//! the bottom, with a gap between them at a random height. A small fixed pool
//! of tubes is recycled by `reposition` once it scrolls off-screen.

use std::rc::Rc;

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use crate::error::GameError;
use crate::platform::{Assets, Texture};

pub const TUBE_WIDTH: f32 = 52.0;

/// Random range added to the lowest gap position
pub const FLUCTUATION: u32 = 130;
/// Vertical size of the gap
pub const TUBE_GAP: f32 = 100.0;
pub const LOWEST_OPENING: f32 = 120.0;

pub const TOP_TUBE_TEXTURE: &str = "topTube.png";
pub const BOTTOM_TUBE_TEXTURE: &str = "bottomTube.png";

/// Pipe images shared by every tube in a session
#[derive(Debug, Clone)]
pub struct TubeTextures {
    pub top: Rc<Texture>,
    pub bottom: Rc<Texture>,
}

impl TubeTextures {
    pub fn load(assets: &Assets) -> Result<Self, GameError> {
        Ok(Self {
            top: Rc::new(assets.texture(TOP_TUBE_TEXTURE)?),
            bottom: Rc::new(assets.texture(BOTTOM_TUBE_TEXTURE)?),
        })
    }
}

#[derive(Debug)]
pub struct Tube {
    textures: TubeTextures,
    pos_top: Vec2,
    pos_bottom: Vec2,
    bounds_top: Rect,
    bounds_bottom: Rect,
    /// The bird has flown past this tube since it was last placed
    passed: bool,
}

/// Random y of the top pipe's lower edge, in [220, 350)
fn gap_height<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(0..FLUCTUATION) as f32 + TUBE_GAP + LOWEST_OPENING
}

impl Tube {
    pub fn new<R: Rng>(x: f32, textures: &TubeTextures, rng: &mut R) -> Self {
        let top = &textures.top;
        let bottom = &textures.bottom;

        let pos_top = Vec2::new(x, gap_height(rng));
        let pos_bottom = Vec2::new(x, pos_top.y - TUBE_GAP - bottom.height() as f32);

        Self {
            bounds_top: Rect::new(pos_top.x, pos_top.y, top.width() as f32, top.height() as f32),
            bounds_bottom: Rect::new(
                pos_bottom.x,
                pos_bottom.y,
                bottom.width() as f32,
                bottom.height() as f32,
            ),
            textures: textures.clone(),
            pos_top,
            pos_bottom,
            passed: false,
        }
    }

    /// Move the pair to `x` with a fresh random gap
    pub fn reposition<R: Rng>(&mut self, x: f32, rng: &mut R) {
        self.pos_top = Vec2::new(x, gap_height(rng));
        self.pos_bottom = Vec2::new(
            x,
            self.pos_top.y - TUBE_GAP - self.textures.bottom.height() as f32,
        );

        self.bounds_top.set_position(self.pos_top);
        self.bounds_bottom.set_position(self.pos_bottom);
        self.passed = false;
    }

    /// True if `player` overlaps either pipe
    pub fn collides(&self, player: &Rect) -> bool {
        player.overlaps(&self.bounds_top) || player.overlaps(&self.bounds_bottom)
    }

    /// Mark the tube as passed; returns true only the first time
    pub fn pass(&mut self) -> bool {
        !std::mem::replace(&mut self.passed, true)
    }

    pub fn top_texture(&self) -> &Texture {
        &self.textures.top
    }

    pub fn bottom_texture(&self) -> &Texture {
        &self.textures.bottom
    }

    pub fn pos_top(&self) -> Vec2 {
        self.pos_top
    }

    pub fn pos_bottom(&self) -> Vec2 {
        self.pos_bottom
    }

    pub fn bounds_top(&self) -> &Rect {
        &self.bounds_top
    }

    pub fn bounds_bottom(&self) -> &Rect {
        &self.bounds_bottom
    }

    /// World x of the pipes' right edge
    pub fn right(&self) -> f32 {
        self.pos_top.x + self.textures.top.width() as f32
    }
}
