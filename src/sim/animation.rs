//! Sprite strip animation
//!
//! A strip holds `frame_count` equally wide frames side by side. The frame
//! index advances once the time spent on the current frame exceeds
//! `cycle_time / frame_count`, and wraps after the last frame.

use crate::error::GameError;
use crate::platform::Region;

#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<Region>,
    max_frame_time: f32,
    current_frame_time: f32,
    frame: usize,
}

impl Animation {
    /// Split `strip` into `frame_count` frames played over `cycle_time` seconds
    pub fn new(strip: &Region, frame_count: usize, cycle_time: f32) -> Result<Self, GameError> {
        if frame_count == 0 {
            return Err(GameError::NoAnimationFrames);
        }

        let frame_width = strip.width / frame_count as u32;
        let frames = (0..frame_count as u32)
            .map(|i| Region::sub(strip, i * frame_width, 0, frame_width, strip.height))
            .collect();

        Ok(Self {
            frames,
            max_frame_time: cycle_time / frame_count as f32,
            current_frame_time: 0.0,
            frame: 0,
        })
    }

    /// Advance by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.current_frame_time += dt;

        if self.current_frame_time > self.max_frame_time {
            self.frame += 1;
            self.current_frame_time = 0.0;
        }

        if self.frame >= self.frames.len() {
            self.frame = 0;
        }
    }

    /// The region to draw this frame
    pub fn frame(&self) -> &Region {
        &self.frames[self.frame]
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Seconds each frame stays on screen
    pub fn frame_time(&self) -> f32 {
        self.max_frame_time
    }
}
