//! Audio playback
//!
//! The host supplies an `AudioPlayer`; `AudioManager` layers the game's
//! volume settings on top of it. Playback is fire-and-forget.

use std::rc::Rc;

use crate::platform::Sound;
use crate::settings::Settings;

/// Host audio backend
pub trait AudioPlayer {
    /// Play a one-shot effect at `volume` (0.0 - 1.0)
    fn play(&self, sound: &Sound, volume: f32);
    /// Start a music track
    fn play_music(&self, sound: &Sound, looping: bool, volume: f32);
    fn stop_music(&self, sound: &Sound);
}

/// Volume-aware front for an `AudioPlayer`
#[derive(Clone)]
pub struct AudioManager {
    player: Rc<dyn AudioPlayer>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(player: Rc<dyn AudioPlayer>) -> Self {
        Self {
            player,
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 0.1,
            muted: false,
        }
    }

    /// Build a manager with the volumes from `settings`
    pub fn from_settings(player: Rc<dyn AudioPlayer>, settings: &Settings) -> Self {
        let mut audio = Self::new(player);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_music_volume(settings.music_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self, channel: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * channel
        }
    }

    /// Play an effect; `volume` is the effect's own loudness before mixing
    pub fn play(&self, sound: &Sound, volume: f32) {
        let vol = self.effective_volume(self.sfx_volume) * volume.clamp(0.0, 1.0);
        if vol <= 0.0 {
            return;
        }
        self.player.play(sound, vol);
    }

    /// Start a music track at the music channel volume
    pub fn play_music(&self, sound: &Sound, looping: bool) {
        let vol = self.effective_volume(self.music_volume);
        log::info!("Music {} (looping: {}, volume: {:.2})", sound.name(), looping, vol);
        self.player.play_music(sound, looping, vol);
    }

    pub fn stop_music(&self, sound: &Sound) {
        self.player.stop_music(sound);
    }
}
