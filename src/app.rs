//! Application object
//!
//! Owns the long-lived pieces (state stack, audio, background music, score
//! counter, RNG) and runs one update + render per host frame.

use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{AudioManager, AudioPlayer};
use crate::consts::MAX_FRAME_DT;
use crate::error::{GameError, check_timestep};
use crate::highscores::HighScore;
use crate::platform::{AssetBackend, Assets, InputSource, RenderSurface, Sound};
use crate::settings::Settings;
use crate::states::{Context, GameStateManager, MenuState, StateKind};

pub const MUSIC_TRACK: &str = "music.mp3";

pub struct FlappyApp {
    settings: Settings,
    assets: Assets,
    audio: AudioManager,
    music: Sound,
    gsm: GameStateManager,
    scores: HighScore,
    rng: Pcg32,
    frames: u64,
}

impl FlappyApp {
    /// Start music and open the menu
    pub fn create(
        settings: Settings,
        backend: Rc<dyn AssetBackend>,
        player: Rc<dyn AudioPlayer>,
        scores: HighScore,
    ) -> Result<Self, GameError> {
        let assets = Assets::new(backend);
        let audio = AudioManager::from_settings(player, &settings);

        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);

        let music = assets.sound(MUSIC_TRACK)?;
        audio.play_music(&music, true);

        let mut gsm = GameStateManager::new();
        gsm.push(Box::new(MenuState::new(&assets, scores.best)?));

        Ok(Self {
            settings,
            assets,
            audio,
            music,
            gsm,
            scores,
            rng: Pcg32::seed_from_u64(seed),
            frames: 0,
        })
    }

    /// Run one host frame: update the active state, then draw it
    pub fn frame(
        &mut self,
        dt: f32,
        input: &dyn InputSource,
        surface: &mut dyn RenderSurface,
    ) -> Result<(), GameError> {
        check_timestep(dt)?;
        let dt = dt.min(MAX_FRAME_DT);

        let mut ctx = Context {
            input,
            assets: &self.assets,
            audio: &self.audio,
            scores: &mut self.scores,
            rng: &mut self.rng,
        };
        self.gsm.update(dt, &mut ctx)?;
        self.gsm.render(surface)?;
        self.frames += 1;
        Ok(())
    }

    /// Stop music and dispose every state. Returns the score counter so the
    /// host can persist it.
    pub fn dispose(mut self) -> HighScore {
        log::info!("Shutting down after {} frames", self.frames);
        self.audio.stop_music(&self.music);
        self.gsm.clear();
        self.scores
    }

    pub fn active_state(&self) -> Option<StateKind> {
        self.gsm.active_kind()
    }

    pub fn states(&self) -> &GameStateManager {
        &self.gsm
    }

    pub fn scores(&self) -> &HighScore {
        &self.scores
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
