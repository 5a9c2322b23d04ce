//! Headless collaborators
//!
//! Used by the native binary (no window) and by tests. Every implementation
//! records what the core asked of it so behaviour can be asserted.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use glam::Vec2;

use super::{AssetBackend, AssetId, InputSource, Region, RenderSurface, Texture, TextureInfo};
use crate::audio::AudioPlayer;
use crate::error::GameError;
use crate::platform::Sound;
use crate::sim::Camera;

/// Image sizes of the stock sprite sheet
const STOCK_TEXTURES: &[(&str, u32, u32)] = &[
    ("bg.png", 272, 512),
    ("playBtn.png", 104, 58),
    ("birdAnimation.png", 102, 24),
    ("topTube.png", 52, 320),
    ("bottomTube.png", 52, 320),
    ("ground.png", 336, 112),
    ("gameover.png", 192, 42),
    ("pause.png", 120, 40),
];

const STOCK_SOUNDS: &[&str] = &["sfx_wing.ogg", "music.mp3"];

/// In-memory asset catalog that tracks live and released handles
#[derive(Debug)]
pub struct HeadlessAssets {
    catalog: RefCell<HashMap<String, (u32, u32)>>,
    sounds: RefCell<Vec<String>>,
    next_id: Cell<AssetId>,
    live_textures: RefCell<HashMap<AssetId, String>>,
    live_sounds: RefCell<HashMap<AssetId, String>>,
    released_textures: RefCell<Vec<String>>,
}

impl Default for HeadlessAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessAssets {
    /// Catalog preloaded with the stock sprite sizes
    pub fn new() -> Self {
        let catalog = STOCK_TEXTURES
            .iter()
            .map(|(name, w, h)| (name.to_string(), (*w, *h)))
            .collect();
        Self {
            catalog: RefCell::new(catalog),
            sounds: RefCell::new(STOCK_SOUNDS.iter().map(|s| s.to_string()).collect()),
            next_id: Cell::new(1),
            live_textures: RefCell::new(HashMap::new()),
            live_sounds: RefCell::new(HashMap::new()),
            released_textures: RefCell::new(Vec::new()),
        }
    }

    /// Register (or resize) an image
    pub fn with_texture(self, name: &str, width: u32, height: u32) -> Self {
        self.catalog
            .borrow_mut()
            .insert(name.to_string(), (width, height));
        self
    }

    /// Remove an image so loading it fails
    pub fn without_texture(self, name: &str) -> Self {
        self.catalog.borrow_mut().remove(name);
        self
    }

    pub fn live_textures(&self) -> usize {
        self.live_textures.borrow().len()
    }

    pub fn live_sounds(&self) -> usize {
        self.live_sounds.borrow().len()
    }

    /// Names of released textures, in release order
    pub fn released_textures(&self) -> Vec<String> {
        self.released_textures.borrow().clone()
    }

    /// How many live handles point at `name`
    pub fn live_named(&self, name: &str) -> usize {
        self.live_textures
            .borrow()
            .values()
            .filter(|n| n.as_str() == name)
            .count()
    }

    fn allocate(&self) -> AssetId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl AssetBackend for HeadlessAssets {
    fn open_texture(&self, name: &str) -> Result<TextureInfo, GameError> {
        let (width, height) =
            self.catalog
                .borrow()
                .get(name)
                .copied()
                .ok_or_else(|| GameError::Asset {
                    name: name.to_string(),
                    reason: "not in catalog".to_string(),
                })?;
        let id = self.allocate();
        self.live_textures.borrow_mut().insert(id, name.to_string());
        Ok(TextureInfo { id, width, height })
    }

    fn release_texture(&self, id: AssetId) {
        match self.live_textures.borrow_mut().remove(&id) {
            Some(name) => self.released_textures.borrow_mut().push(name),
            None => log::warn!("Texture {} released twice or never opened", id),
        }
    }

    fn open_sound(&self, name: &str) -> Result<AssetId, GameError> {
        if !self.sounds.borrow().iter().any(|s| s == name) {
            return Err(GameError::Asset {
                name: name.to_string(),
                reason: "not in catalog".to_string(),
            });
        }
        let id = self.allocate();
        self.live_sounds.borrow_mut().insert(id, name.to_string());
        Ok(id)
    }

    fn release_sound(&self, id: AssetId) {
        if self.live_sounds.borrow_mut().remove(&id).is_none() {
            log::warn!("Sound {} released twice or never opened", id);
        }
    }
}

/// Input driven by the caller: set flags before a frame, clear after
#[derive(Debug, Default)]
pub struct ScriptedInput {
    touched: Cell<bool>,
    pause: Cell<bool>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a touch for the coming frame
    pub fn tap(&self) {
        self.touched.set(true);
    }

    /// Register a pause key press for the coming frame
    pub fn press_pause(&self) {
        self.pause.set(true);
    }

    /// Clear one-shot inputs after a frame was processed
    pub fn end_frame(&self) {
        self.touched.set(false);
        self.pause.set(false);
    }
}

impl InputSource for ScriptedInput {
    fn just_touched(&self) -> bool {
        self.touched.get()
    }

    fn pause_pressed(&self) -> bool {
        self.pause.get()
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Begin { camera: Vec2 },
    Texture { name: String, x: f32, y: f32 },
    Region { name: String, x: f32, y: f32, src_x: u32 },
    Text { text: String, x: f32, y: f32 },
    End,
}

/// Render surface that keeps every call
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    depth: u32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Number of draws (plain or region) of the named texture
    pub fn draws_of(&self, name: &str) -> usize {
        self.calls
            .iter()
            .filter(|c| match c {
                DrawCall::Texture { name: n, .. } | DrawCall::Region { name: n, .. } => n == name,
                _ => false,
            })
            .count()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn begin(&mut self, camera: &Camera) {
        debug_assert_eq!(self.depth, 0, "begin() inside an open batch");
        self.depth += 1;
        self.calls.push(DrawCall::Begin {
            camera: camera.position,
        });
    }

    fn draw(&mut self, texture: &Texture, x: f32, y: f32) {
        self.calls.push(DrawCall::Texture {
            name: texture.name().to_string(),
            x,
            y,
        });
    }

    fn draw_region(&mut self, region: &Region, x: f32, y: f32) {
        self.calls.push(DrawCall::Region {
            name: region.texture().name().to_string(),
            x,
            y,
            src_x: region.x,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn end(&mut self) {
        debug_assert_eq!(self.depth, 1, "end() without begin()");
        self.depth = self.depth.saturating_sub(1);
        self.calls.push(DrawCall::End);
    }
}

/// Audio sink that logs what it was asked to play
#[derive(Debug, Default)]
pub struct RecordingAudio {
    played: RefCell<Vec<(String, f32)>>,
    music: RefCell<Option<(String, bool, f32)>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot effects played so far with their volume
    pub fn played(&self) -> Vec<(String, f32)> {
        self.played.borrow().clone()
    }

    /// Currently playing music track as (name, looping, volume)
    pub fn music(&self) -> Option<(String, bool, f32)> {
        self.music.borrow().clone()
    }
}

impl AudioPlayer for RecordingAudio {
    fn play(&self, sound: &Sound, volume: f32) {
        self.played
            .borrow_mut()
            .push((sound.name().to_string(), volume));
    }

    fn play_music(&self, sound: &Sound, looping: bool, volume: f32) {
        *self.music.borrow_mut() = Some((sound.name().to_string(), looping, volume));
    }

    fn stop_music(&self, sound: &Sound) {
        let mut music = self.music.borrow_mut();
        if music.as_ref().is_some_and(|(name, _, _)| name == sound.name()) {
            *music = None;
        }
    }
}
