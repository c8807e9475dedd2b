//! Frame loop
//!
//! One frame: sample time, advance the simulation, hand impacts to audio,
//! issue draw calls. Everything runs on the calling thread.

use crate::audio::AudioSink;
use crate::platform::Shell;
use crate::renderer::Surface;
use crate::scene;
use crate::settings::Settings;
use crate::sim::{FrameInput, ImpactEvent, Layout, SimState, tick};

/// Simulation context plus presentation settings
#[derive(Debug, Clone)]
pub struct App {
    pub state: SimState,
    pub settings: Settings,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self::with_layout(Layout::default(), settings)
    }

    pub fn with_layout(layout: Layout, settings: Settings) -> Self {
        Self {
            state: SimState::new(layout),
            settings,
        }
    }

    /// Run one frame sampled at `time`
    pub fn step<S: Surface, A: AudioSink>(
        &mut self,
        time: f64,
        frame_dt: f64,
        surface: &mut S,
        audio: &mut A,
    ) -> Vec<ImpactEvent> {
        let input = FrameInput {
            time,
            frame_dt,
            strategy: self.settings.detection,
        };
        let events = tick(&mut self.state, &input);

        for event in &events {
            log::debug!(
                "impact arc={} t={:.4} late={:+.4}",
                event.arc_index,
                event.detected_time,
                event.detected_time - event.scheduled_time
            );
            audio.play(event.sound);
        }

        scene::draw_frame(&self.state, &self.settings, surface);
        events
    }

    /// Drive frames until the shell asks to close
    pub fn run<H: Shell, S: Surface, A: AudioSink>(
        &mut self,
        shell: &mut H,
        surface: &mut S,
        audio: &mut A,
    ) {
        log::info!(
            "Frame loop started: {} arcs, {} detection",
            self.state.arcs.len(),
            self.settings.detection.as_str()
        );

        while !shell.close_requested() {
            let time = shell.current_time();
            let frame_dt = shell.frame_delta();
            self.step(time, frame_dt, surface, audio);
            shell.end_frame();
        }

        log::info!(
            "Frame loop stopped after {} frames, {} impacts",
            self.state.frame_count,
            self.state.impact_count
        );
    }
}
