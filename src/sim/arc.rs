//! Arc geometry
//!
//! An arc is a thick half ring over the baseline:
//! - radius: centreline distance from the shared centre
//! - thickness: radial extent (inner = radius - thickness/2, outer = radius + thickness/2)
//! - ringer: the single point sweeping it, fixed at setup

use glam::Vec2;

use super::ringer::Ringer;

/// One half ring and the ringer it owns
#[derive(Debug, Clone)]
pub struct ArcSegment {
    /// Position in the arc array (0 = innermost)
    pub index: usize,
    /// Centerline radius from the shared centre
    pub radius: i32,
    /// Radial thickness (extends radius ± thickness/2)
    pub thickness: u32,
    /// Rendering-only colour lookup key
    pub color_tag: u32,
    pub ringer: Ringer,
}

impl ArcSegment {
    pub fn new(index: usize, radius: i32, thickness: u32, ringer: Ringer) -> Self {
        Self {
            index,
            radius,
            thickness,
            color_tag: index as u32,
            ringer,
        }
    }

    /// Inner radius of the arc band
    #[inline]
    pub fn inner_radius(&self) -> f32 {
        (self.radius - (self.thickness / 2) as i32) as f32
    }

    /// Outer radius of the arc band
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        (self.radius + (self.thickness / 2) as i32) as f32
    }

    /// Move the ringer to where it is at `time`
    pub fn update(&mut self, center: Vec2, time: f64) {
        self.ringer.update(center, self.radius, time);
    }

    /// The two points where the arc meets the baseline (right, left)
    pub fn baseline_contacts(&self, center: Vec2) -> (Vec2, Vec2) {
        let r = self.radius as f32;
        (center + Vec2::new(r, 0.0), center - Vec2::new(r, 0.0))
    }
}
