//! Deterministic simulation module
//!
//! All kinetic logic lives here. This module must be pure and deterministic:
//! - Time comes in through `FrameInput` only
//! - Stable iteration order (by arc index)
//! - No rendering, audio or platform dependencies

pub mod arc;
pub mod impact;
pub mod ringer;
pub mod state;
pub mod tick;

pub use arc::ArcSegment;
pub use impact::{DetectionStrategy, detect_impact, fire, next_impact_time, sign_changed};
pub use ringer::{
    Ringer, SoundHandle, angle_at_time, base_loop_velocity, position_on_arc, radius_for_index,
    velocity_for_index,
};
pub use state::{Layout, SimState};
pub use tick::{FrameInput, ImpactEvent, tick};
