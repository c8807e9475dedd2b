//! Simulation state
//!
//! All mutable simulation data lives in one context object, built once at
//! setup. The arc array never grows or shrinks afterwards.

use glam::Vec2;

use super::arc::ArcSegment;
use super::impact::next_impact_time;
use super::ringer::{Ringer, SoundHandle, loops_for_index, radius_for_index, velocity_for_index};
use crate::arc_center;
use crate::consts::*;

/// Setup parameters for the arc array
///
/// Radii must stay positive and below `max_radius`; this is a precondition of
/// the constants, not something checked at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub arc_count: usize,
    pub max_radius: i32,
    pub spacing: i32,
    pub padding: i32,
    /// Width of each arc band
    pub arc_width: u32,
    pub min_loop_count: u32,
    pub seconds_per_base_loop: f64,
    /// Shared centre of every arc
    pub center: Vec2,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            arc_count: NUMBER_OF_ARCS,
            max_radius: MAX_ARC_RADIUS as i32,
            spacing: ARC_SPACING as i32,
            padding: SIDE_PADDING as i32,
            arc_width: ARC_WIDTH,
            min_loop_count: MIN_LOOP_COUNT,
            seconds_per_base_loop: SECONDS_PER_BASE_LOOP,
            center: arc_center(),
        }
    }
}

impl Layout {
    pub fn radius_for(&self, i: usize) -> i32 {
        radius_for_index(i, self.arc_count, self.max_radius, self.spacing, self.padding)
    }

    pub fn velocity_for(&self, i: usize) -> f64 {
        velocity_for_index(i, self.arc_count, self.min_loop_count, self.seconds_per_base_loop)
    }

    pub fn loops_for(&self, i: usize) -> u32 {
        loops_for_index(i, self.arc_count, self.min_loop_count)
    }

    /// Build arc `i` with its ringer armed for the first crossing
    fn build_arc(&self, i: usize) -> ArcSegment {
        let velocity = self.velocity_for(i);
        let ringer = Ringer::new(
            velocity,
            self.loops_for(i),
            next_impact_time(0.0, velocity),
            SoundHandle::for_index(i),
            i as u32,
        );
        let mut arc = ArcSegment::new(i, self.radius_for(i), self.arc_width, ringer);
        arc.update(self.center, 0.0);
        arc
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    pub layout: Layout,
    /// Arcs by index, innermost first
    pub arcs: Vec<ArcSegment>,
    /// Impacts fired since setup (display only)
    pub impact_count: u64,
    /// Time of the last processed frame
    pub time: f64,
    /// Frames processed since setup
    pub frame_count: u64,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl SimState {
    pub fn new(layout: Layout) -> Self {
        let arcs = (0..layout.arc_count).map(|i| layout.build_arc(i)).collect();
        Self {
            layout,
            arcs,
            impact_count: 0,
            time: 0.0,
            frame_count: 0,
        }
    }

    pub fn ringer(&self, index: usize) -> &Ringer {
        &self.arcs[index].ringer
    }

    /// Seconds until every ringer is back at angle zero together
    pub fn cycle_seconds(&self) -> f64 {
        self.layout.seconds_per_base_loop
    }
}
