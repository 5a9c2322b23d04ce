//! Flappy Demo entry point
//!
//! Runs the game headlessly: no window, scripted taps, a recording surface.
//! Useful for smoke-testing the state flow and for tuning with `RUST_LOG`.

use std::path::Path;
use std::rc::Rc;

use flappy_demo::consts::FRAME_DT;
use flappy_demo::platform::headless::{HeadlessAssets, RecordingAudio, RecordingSurface, ScriptedInput};
use flappy_demo::{FlappyApp, GameError, HighScore, Settings};

const SETTINGS_FILE: &str = "flappy_settings.json";
const HIGHSCORE_FILE: &str = "flappy_highscore.json";

fn main() {
    env_logger::init();
    log::info!("Flappy Demo (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let scores = HighScore::load(Path::new(HIGHSCORE_FILE));
    let window = &settings.window;
    log::info!("Window: {} ({}x{})", window.title, window.width, window.height);

    let backend = Rc::new(HeadlessAssets::new());
    let player = Rc::new(RecordingAudio::new());
    let mut app = FlappyApp::create(settings, backend.clone(), player.clone(), scores)?;
    let demo_frames = app.settings().demo_frames;
    let tap_interval = app.settings().demo_tap_interval;

    let input = ScriptedInput::new();
    let mut surface = RecordingSurface::new();
    let mut last_state = app.active_state();

    for frame in 0..demo_frames {
        if frame % tap_interval == 0 {
            input.tap();
        }

        surface.clear();
        app.frame(FRAME_DT, &input, &mut surface)?;
        input.end_frame();

        let state = app.active_state();
        if state != last_state {
            log::info!("Frame {}: {:?} -> {:?}", frame, last_state, state);
            last_state = state;
        }
    }

    let flaps = player.played().len();
    let scores = app.dispose();
    log::info!(
        "Done: best {}, runs {}, flaps {}",
        scores.best,
        scores.games_played,
        flaps
    );
    if backend.live_textures() > 0 || backend.live_sounds() > 0 {
        log::warn!(
            "Leaked {} textures and {} sounds",
            backend.live_textures(),
            backend.live_sounds()
        );
    }

    if let Err(e) = scores.save(Path::new(HIGHSCORE_FILE)) {
        log::warn!("Could not save high score: {}", e);
    }
    Ok(())
}
