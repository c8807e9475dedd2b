//! Sound of Arcs - a kinetic-art simulation of chiming concentric arcs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ringer kinematics, impact scheduling)
//! - `audio`: Tone palette, sample loading and playback
//! - `renderer`: Drawing surface interface and CPU tessellation
//! - `scene`: Per-frame draw order
//! - `platform`: Clocks and the frame-rate governor
//! - `app`: The frame loop tying the pieces together

pub mod app;
pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use app::App;
pub use error::{ArcsError, Result};
pub use settings::Settings;

use glam::Vec2;

/// Compile-time configuration
pub mod consts {
    pub const APP_TITLE: &str = "Sound of Arcs";

    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH: u32 = 1280;
    pub const WINDOW_HEIGHT: u32 = 720;
    pub const FONT_SIZE: u32 = 40;

    pub const BOTTOM_PADDING: u32 = 100;
    pub const SIDE_PADDING: u32 = 60;

    /// Arc layout
    pub const ARC_SPACING: u32 = 25;
    pub const ARC_WIDTH: u32 = 5;
    pub const NUMBER_OF_ARCS: usize = 21;
    pub const MAX_ARC_RADIUS: u32 = WINDOW_WIDTH / 2;

    pub const RINGER_RADIUS: f32 = 10.0;
    /// Baseline thickness
    pub const LINE_WIDTH: u32 = 4;

    /// Every ringer completes at least this many loops per base period
    pub const MIN_LOOP_COUNT: u32 = 2;
    /// Length of the base period; all ringers realign after it
    pub const SECONDS_PER_BASE_LOOP: f64 = 60.0;

    /// Target frame rate of the frame loop
    pub const FRAMES_PER_SECOND: u32 = 30;
    pub const FRAME_DT: f64 = 1.0 / FRAMES_PER_SECOND as f64;

    /// Directory holding the kalimba samples
    pub const SOUND_DIR: &str = "sounds";
    /// Number of distinct tones; ringers cycle through them by index
    pub const TONE_COUNT: usize = 8;

    /// Default output volume (0.0 - 1.0)
    pub const MASTER_VOLUME: f32 = 0.8;
}

/// Centre shared by every arc: horizontally centred, sitting on the baseline
#[inline]
pub fn arc_center() -> Vec2 {
    use consts::*;
    Vec2::new(
        (WINDOW_WIDTH / 2) as f32,
        (WINDOW_HEIGHT - BOTTOM_PADDING) as f32,
    )
}

/// Map an angle to the upper half of a circle (screen coordinates, y down)
///
/// The sine is folded with `abs`, so the point bounces between the two
/// baseline ends instead of travelling around the lower half.
#[inline]
pub fn bounce_point(center: Vec2, radius: f32, angle: f64) -> Vec2 {
    let r = radius as f64;
    Vec2::new(
        (r * angle.cos() + center.x as f64) as f32,
        (-r * angle.sin().abs() + center.y as f64) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_bounce_point_cardinal_angles() {
        let c = Vec2::new(100.0, 200.0);
        let p = bounce_point(c, 50.0, 0.0);
        assert!((p - Vec2::new(150.0, 200.0)).length() < 1e-4);

        let p = bounce_point(c, 50.0, FRAC_PI_2);
        assert!((p - Vec2::new(100.0, 150.0)).length() < 1e-4);

        let p = bounce_point(c, 50.0, PI);
        assert!((p - Vec2::new(50.0, 200.0)).length() < 1e-4);
    }

    #[test]
    fn test_bounce_point_reflects_lower_half() {
        let c = Vec2::new(0.0, 0.0);
        let upper = bounce_point(c, 10.0, FRAC_PI_2);
        let lower = bounce_point(c, 10.0, -FRAC_PI_2);
        assert!((upper - lower).length() < 1e-5);
    }

    #[test]
    fn test_arc_center_sits_above_bottom_padding() {
        let c = arc_center();
        assert_eq!(c.x, 640.0);
        assert_eq!(c.y, 620.0);
    }
}
