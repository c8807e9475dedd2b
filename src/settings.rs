//! Presentation and detection settings
//!
//! Defaults come from compile-time constants; nothing is loaded at runtime.

use serde::{Deserialize, Serialize};

use crate::consts::MASTER_VOLUME;
use crate::sim::DetectionStrategy;

/// How arcs and ringers are coloured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorMode {
    /// Gray arcs, white ringers
    #[default]
    Mono,
    /// Hue sweeps from the innermost arc to the outermost
    Spectrum,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Mono => "Mono",
            ColorMode::Spectrum => "Spectrum",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mono" => Some(ColorMode::Mono),
            "spectrum" | "rainbow" => Some(ColorMode::Spectrum),
            _ => None,
        }
    }
}

/// Runtime settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Impact detection policy
    pub detection: DetectionStrategy,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,

    // === HUD ===
    /// Frame time, impact count and title
    pub show_overlay: bool,
    /// Impacts left in the cycle, next to each arc
    pub show_cycle_labels: bool,

    pub color_mode: ColorMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            detection: DetectionStrategy::TimeWindow,

            master_volume: MASTER_VOLUME,
            muted: false,

            show_overlay: true,
            show_cycle_labels: true,

            color_mode: ColorMode::Mono,
        }
    }
}

impl Settings {
    /// Volume actually applied to playback
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0)
        }
    }
}
