//! Ringer kinematics
//!
//! A ringer is the point that sweeps the upper half of its arc. Everything
//! here is a pure function of (index, time); nothing knows about rendering
//! or audio.

use std::f64::consts::{PI, TAU};

use glam::Vec2;

use crate::bounce_point;
use crate::consts::TONE_COUNT;

/// Opaque reference to one slot of the tone palette
///
/// The audio layer owns the actual samples; the simulation only carries the
/// slot so impacts can name what to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(usize);

impl SoundHandle {
    /// Tones are assigned cyclically over the palette
    pub fn for_index(index: usize) -> Self {
        Self(index % TONE_COUNT)
    }

    pub fn slot(&self) -> usize {
        self.0
    }
}

/// Angular velocity of one loop per base period
#[inline]
pub fn base_loop_velocity(seconds_per_base_loop: f64) -> f64 {
    TAU / seconds_per_base_loop
}

/// Full loops ringer `i` completes per base period
///
/// Index 0 (innermost) loops the most. `i > total` is a caller error and is
/// not checked.
#[inline]
pub fn loops_for_index(i: usize, total: usize, min_loop_count: u32) -> u32 {
    min_loop_count + total.saturating_sub(i) as u32
}

/// `(min_loop_count + (total - i)) * 2π / seconds_per_base_loop`
///
/// Strictly decreasing in `i`: index 0 is the fastest ringer.
#[inline]
pub fn velocity_for_index(
    i: usize,
    total: usize,
    min_loop_count: u32,
    seconds_per_base_loop: f64,
) -> f64 {
    let loops = min_loop_count as f64 + (total as f64 - i as f64);
    loops * base_loop_velocity(seconds_per_base_loop)
}

/// `max_radius - (total - i) * spacing - padding`
///
/// Strictly increasing in `i`: index 0 is the innermost arc. No clamping;
/// bad constants give a wrong picture, never a panic.
#[inline]
pub fn radius_for_index(i: usize, total: usize, max_radius: i32, spacing: i32, padding: i32) -> i32 {
    max_radius - (total as i32 - i as i32) * spacing - padding
}

/// Unwrapped angle at `time`
#[inline]
pub fn angle_at_time(time: f64, angular_velocity: f64) -> f64 {
    time * angular_velocity
}

/// Point on the upper half of the arc for `angle`
#[inline]
pub fn position_on_arc(center: Vec2, radius: i32, angle: f64) -> Vec2 {
    bounce_point(center, radius as f32, angle)
}

/// Moving point hosted by one arc
#[derive(Debug, Clone)]
pub struct Ringer {
    /// Radians per second, fixed at setup
    pub angular_velocity: f64,
    /// Full loops per base period (velocity in units of the base loop)
    pub loops_per_cycle: u32,
    /// Next simulated time this ringer is expected on the baseline
    pub next_impact_time: f64,
    /// Angle computed on the last frame
    pub angle: f64,
    /// Screen position computed on the last frame
    pub position: Vec2,
    /// Palette slot played on impact
    pub sound: SoundHandle,
    /// Rendering-only colour lookup key
    pub color_tag: u32,
}

impl Ringer {
    pub fn new(
        angular_velocity: f64,
        loops_per_cycle: u32,
        next_impact_time: f64,
        sound: SoundHandle,
        color_tag: u32,
    ) -> Self {
        Self {
            angular_velocity,
            loops_per_cycle,
            next_impact_time,
            angle: 0.0,
            position: Vec2::ZERO,
            sound,
            color_tag,
        }
    }

    /// Angle at an arbitrary time
    #[inline]
    pub fn angle_at(&self, time: f64) -> f64 {
        angle_at_time(time, self.angular_velocity)
    }

    /// Recompute angle and position for this frame
    pub fn update(&mut self, center: Vec2, radius: i32, time: f64) {
        self.angle = self.angle_at(time);
        self.position = position_on_arc(center, radius, self.angle);
    }

    /// Baseline crossings per base period (two per full loop)
    pub fn impacts_per_cycle(&self) -> u32 {
        2 * self.loops_per_cycle
    }

    /// Crossings left before every ringer realigns at the end of the period
    pub fn impacts_remaining_in_cycle(&self, time: f64, cycle_seconds: f64) -> u32 {
        let elapsed = time.rem_euclid(cycle_seconds);
        let crossed = (self.angle_at(elapsed) / PI).floor() as u32;
        self.impacts_per_cycle().saturating_sub(crossed)
    }
}
