//! Platform abstraction layer
//!
//! The simulation never talks to a window, GPU or decoder directly. It calls
//! into these collaborators instead:
//! - `RenderSurface`: batched sprite/text drawing under a camera
//! - `InputSource`: per-frame touch/pause polling
//! - `AssetBackend`: resolves named images/sounds to opaque handles
//!
//! `Texture` and `Sound` own their backend handle and release it on drop, so a
//! state that is popped frees everything it loaded exactly once.

pub mod headless;

use std::fmt;
use std::rc::Rc;

use crate::error::GameError;
use crate::sim::Camera;

/// Opaque backend handle
pub type AssetId = u32;

/// What a backend reports for a freshly opened image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub id: AssetId,
    pub width: u32,
    pub height: u32,
}

/// Host-side asset storage (GPU textures, decoded sound buffers, ...)
///
/// Methods take `&self`; backends keep their bookkeeping behind interior
/// mutability so handles can release themselves from `Drop`.
pub trait AssetBackend {
    fn open_texture(&self, name: &str) -> Result<TextureInfo, GameError>;
    fn release_texture(&self, id: AssetId);
    fn open_sound(&self, name: &str) -> Result<AssetId, GameError>;
    fn release_sound(&self, id: AssetId);
}

/// Cloneable front door to an `AssetBackend`
#[derive(Clone)]
pub struct Assets {
    backend: Rc<dyn AssetBackend>,
}

impl Assets {
    pub fn new(backend: Rc<dyn AssetBackend>) -> Self {
        Self { backend }
    }

    /// Load a named image
    pub fn texture(&self, name: &str) -> Result<Texture, GameError> {
        let info = self.backend.open_texture(name)?;
        log::debug!("Loaded texture {} ({}x{})", name, info.width, info.height);
        Ok(Texture {
            id: info.id,
            name: name.to_string(),
            width: info.width,
            height: info.height,
            backend: Rc::clone(&self.backend),
        })
    }

    /// Load a named sound or music track
    pub fn sound(&self, name: &str) -> Result<Sound, GameError> {
        let id = self.backend.open_sound(name)?;
        log::debug!("Loaded sound {}", name);
        Ok(Sound {
            id,
            name: name.to_string(),
            backend: Rc::clone(&self.backend),
        })
    }
}

/// An owned image handle, released when dropped
pub struct Texture {
    id: AssetId,
    name: String,
    width: u32,
    height: u32,
    backend: Rc<dyn AssetBackend>,
}

impl Texture {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        log::debug!("Releasing texture {}", self.name);
        self.backend.release_texture(self.id);
    }
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// A rectangular sub-image of a shared texture
#[derive(Debug, Clone)]
pub struct Region {
    texture: Rc<Texture>,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// The whole texture
    pub fn full(texture: Rc<Texture>) -> Self {
        let (width, height) = (texture.width(), texture.height());
        Self {
            texture,
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// A window into `parent`, with offsets relative to the parent's origin
    pub fn sub(parent: &Region, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            texture: Rc::clone(&parent.texture),
            x: parent.x + x,
            y: parent.y + y,
            width,
            height,
        }
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }
}

/// An owned sound handle, released when dropped
pub struct Sound {
    id: AssetId,
    name: String,
    backend: Rc<dyn AssetBackend>,
}

impl Sound {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for Sound {
    fn drop(&mut self) {
        log::debug!("Releasing sound {}", self.name);
        self.backend.release_sound(self.id);
    }
}

impl fmt::Debug for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sound")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

/// Sprite batch the states draw into, once per visible object per frame
pub trait RenderSurface {
    /// Start a batch projected through `camera`
    fn begin(&mut self, camera: &Camera);
    fn draw(&mut self, texture: &Texture, x: f32, y: f32);
    fn draw_region(&mut self, region: &Region, x: f32, y: f32);
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
    fn end(&mut self);
}

/// Per-frame input poll
pub trait InputSource {
    /// A primary touch/click was registered this frame
    fn just_touched(&self) -> bool;

    /// The pause key was pressed this frame
    fn pause_pressed(&self) -> bool {
        false
    }
}
