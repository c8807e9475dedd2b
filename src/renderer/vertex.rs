//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color (screen pixels, y down)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for scene elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const ARC: [f32; 4] = [0.51, 0.51, 0.51, 1.0];
    pub const BASELINE: [f32; 4] = ARC;
    pub const RINGER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT: [f32; 4] = [0.78, 0.78, 0.78, 1.0];

    /// Convert HSV (all in 0-1) to RGBA
    pub fn hsv(h: f32, s: f32, v: f32, alpha: f32) -> [f32; 4] {
        let h6 = (h.rem_euclid(1.0)) * 6.0;
        let c = v * s;
        let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h6 as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        [r + m, g + m, b + m, alpha]
    }

    /// Spectrum colour for tag `tag` out of `count`
    pub fn spectrum(tag: u32, count: usize, value: f32) -> [f32; 4] {
        let t = tag as f32 / count.max(1) as f32;
        hsv(t * 0.85, 0.75, value, 1.0)
    }
}
