//! Stick input filters
//!
//! Shaping applied to raw joystick axes before they become drive commands:
//!
//! - [`apply_deadband`]: dead-zone around the neutral position
//! - [`SlewRateLimiter`]: bounds the per-second rate of change of a signal

mod deadband;
mod slew;

pub use deadband::apply_deadband;
pub use slew::SlewRateLimiter;
