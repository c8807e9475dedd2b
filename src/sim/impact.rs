//! Impact scheduling and detection
//!
//! Each ringer is always armed: once per frame we ask whether its scheduled
//! crossing fell inside the frame, and on a hit we fire and reschedule from
//! the current time. There is no terminal state.
//!
//! # Known limitation
//!
//! Time-window detection accepts a scheduled instant within one frame delta
//! either side of the sampled time. A frame-rate spike widens the window
//! enough that a crossing can be caught twice; a long stall lets a crossing
//! fall between two windows and it is silently skipped. Rescheduling from
//! the detection time (not the ideal time) keeps error from accumulating, at
//! the cost of shifting that ringer's phase by up to one frame per impact.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::ringer::Ringer;

/// How a frame decides that a ringer reached the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DetectionStrategy {
    /// Scheduled impact time within ± one frame delta of now
    #[default]
    TimeWindow,
    /// Sine of the angle changed sign since the previous frame
    SignChange,
}

impl DetectionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionStrategy::TimeWindow => "time-window",
            DetectionStrategy::SignChange => "sign-change",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "time-window" | "window" => Some(DetectionStrategy::TimeWindow),
            "sign-change" | "sign" => Some(DetectionStrategy::SignChange),
            _ => None,
        }
    }

    /// Whether `ringer` hits the baseline in the frame sampled at `now`
    pub fn fires(&self, ringer: &Ringer, now: f64, frame_dt: f64) -> bool {
        match self {
            DetectionStrategy::TimeWindow => detect_impact(ringer.next_impact_time, now, frame_dt),
            DetectionStrategy::SignChange => {
                sign_changed(ringer.angle_at(now - frame_dt), ringer.angle_at(now))
            }
        }
    }
}

/// Successive baseline crossings are half a sine period apart
#[inline]
pub fn next_impact_time(current_impact_time: f64, angular_velocity: f64) -> f64 {
    current_impact_time + PI / angular_velocity
}

/// True when `scheduled` lies in `[now - frame_dt, now + frame_dt]`
#[inline]
pub fn detect_impact(scheduled: f64, now: f64, frame_dt: f64) -> bool {
    scheduled >= now - frame_dt && scheduled <= now + frame_dt
}

/// True when the sine left one side of zero between the two angles
///
/// The previous sample must be strictly off the baseline, so a frame that
/// lands exactly on zero is not counted again by the next one.
#[inline]
pub fn sign_changed(previous_angle: f64, angle: f64) -> bool {
    let before = previous_angle.sin();
    let after = angle.sin();
    (before > 0.0 && after <= 0.0) || (before < 0.0 && after >= 0.0)
}

/// Rearm `ringer` after an impact detected at `now`
///
/// Returns the scheduled time that was consumed.
pub fn fire(ringer: &mut Ringer, now: f64) -> f64 {
    let consumed = ringer.next_impact_time;
    ringer.next_impact_time = next_impact_time(now, ringer.angular_velocity);
    consumed
}
