//! Orthographic 2D camera

use glam::Vec2;

/// A viewport of fixed size centred on `position`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    /// Camera looking at the rectangle (0, 0)..(width, height)
    pub fn ortho(width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(width / 2.0, height / 2.0),
            viewport: Vec2::new(width, height),
        }
    }

    /// World x of the left screen edge
    pub fn left(&self) -> f32 {
        self.position.x - self.viewport.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.viewport.x / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.position.y - self.viewport.y / 2.0
    }
}
