//! Sound of Arcs entry point
//!
//! Loads the samples, opens audio and runs the frame loop. Asset problems
//! abort before the first frame.

use anyhow::Context;

use sound_of_arcs::audio::{AudioSink, SoundBank};
use sound_of_arcs::consts::*;
use sound_of_arcs::platform::NativeShell;
use sound_of_arcs::renderer::VertexSurface;
use sound_of_arcs::{App, Settings};

fn run_loop<A: AudioSink>(app: &mut App, audio: &mut A) {
    let mut shell = NativeShell::new(FRAMES_PER_SECOND);
    let mut surface = VertexSurface::new();
    app.run(&mut shell, &mut surface, audio);
}

#[cfg(feature = "playback")]
fn open_audio(bank: &SoundBank, settings: &Settings) -> anyhow::Result<impl AudioSink + use<>> {
    let audio = sound_of_arcs::audio::AudioManager::new(bank, settings.effective_volume())
        .context("Failed to open audio output")?;
    Ok(audio)
}

#[cfg(not(feature = "playback"))]
fn open_audio(_bank: &SoundBank, _settings: &Settings) -> anyhow::Result<impl AudioSink + use<>> {
    log::warn!("Built without the `playback` feature - impacts are silent");
    Ok(sound_of_arcs::audio::SilentAudio::new())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("{} starting...", APP_TITLE);

    let bank = SoundBank::load(SOUND_DIR)
        .with_context(|| format!("Failed to load sounds from '{}'", SOUND_DIR))?;

    let settings = Settings::default();
    let mut audio = open_audio(&bank, &settings)?;

    log::info!(
        "Headless {}x{} surface at {} fps - attach a window backend to present frames",
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        FRAMES_PER_SECOND
    );

    let mut app = App::new(settings);
    run_loop(&mut app, &mut audio);
    Ok(())
}
