//! Platform abstraction layer
//!
//! Handles what the frame loop needs from the outside world:
//! - Time sampling
//! - Frame pacing
//! - The close-requested signal

use std::time::{Duration, Instant};

use crate::consts::{FRAME_DT, FRAMES_PER_SECOND};

/// What the frame loop needs from its host
pub trait Shell {
    /// Monotonic simulated time, sampled once per frame
    fn current_time(&self) -> f64;

    /// Time elapsed between the two most recent frames
    fn frame_delta(&self) -> f64;

    /// Checked between frames; the loop exits once it returns true
    fn close_requested(&self) -> bool;

    /// Called after each frame; may wait to hold the target frame rate
    fn end_frame(&mut self);
}

/// Sleeps out the remainder of each frame interval
#[derive(Debug)]
pub struct FrameGovernor {
    target: Duration,
    frame_start: Instant,
}

impl Default for FrameGovernor {
    fn default() -> Self {
        Self::new(FRAMES_PER_SECOND)
    }
}

impl FrameGovernor {
    pub fn new(fps: u32) -> Self {
        Self {
            target: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            frame_start: Instant::now(),
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    /// Block until the current frame interval is used up
    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.target {
            std::thread::sleep(self.target - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

/// Wall-clock shell for the native binary
///
/// Runs until the process is terminated.
#[derive(Debug)]
pub struct NativeShell {
    start: Instant,
    /// Time sampled at the end of the previous frame
    frame_time: f64,
    frame_delta: f64,
    governor: FrameGovernor,
}

impl Default for NativeShell {
    fn default() -> Self {
        Self::new(FRAMES_PER_SECOND)
    }
}

impl NativeShell {
    pub fn new(fps: u32) -> Self {
        Self {
            start: Instant::now(),
            frame_time: 0.0,
            frame_delta: 0.0,
            governor: FrameGovernor::new(fps),
        }
    }
}

impl Shell for NativeShell {
    fn current_time(&self) -> f64 {
        self.frame_time
    }

    fn frame_delta(&self) -> f64 {
        self.frame_delta
    }

    fn close_requested(&self) -> bool {
        false
    }

    fn end_frame(&mut self) {
        self.governor.wait();
        let now = self.start.elapsed().as_secs_f64();
        self.frame_delta = now - self.frame_time;
        self.frame_time = now;
    }
}

/// Deterministic shell: time advances by a fixed step per frame
///
/// Used for headless runs and tests. Requests close after `frame_limit`
/// frames when one is set.
#[derive(Debug, Clone)]
pub struct FixedStepShell {
    pub dt: f64,
    pub frame: u64,
    pub frame_limit: Option<u64>,
}

impl Default for FixedStepShell {
    fn default() -> Self {
        Self::new(FRAME_DT)
    }
}

impl FixedStepShell {
    pub fn new(dt: f64) -> Self {
        Self {
            dt,
            frame: 0,
            frame_limit: None,
        }
    }

    pub fn with_limit(dt: f64, frames: u64) -> Self {
        Self {
            frame_limit: Some(frames),
            ..Self::new(dt)
        }
    }
}

impl Shell for FixedStepShell {
    fn current_time(&self) -> f64 {
        self.frame as f64 * self.dt
    }

    fn frame_delta(&self) -> f64 {
        self.dt
    }

    fn close_requested(&self) -> bool {
        self.frame_limit.is_some_and(|limit| self.frame >= limit)
    }

    fn end_frame(&mut self) {
        self.frame += 1;
    }
}
