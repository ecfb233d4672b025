//! Periodic commands
//!
//! The align-and-shoot behavior split into three layers:
//!
//! - [`AlignShootController`]: pure control law, one call per cycle
//! - [`AlignShootCommand`]: the control law bound to its collaborators
//! - [`CommandRunner`]: host-side lifecycle and delta-time handling

mod align_shoot;
mod controller;
mod runner;
mod traits;
mod types;

pub use align_shoot::{
    AlignShootCommand, CHANNEL_DESIRED_ANGLE, CHANNEL_DESIRED_RPM, CHANNEL_DISTANCE,
};
pub use controller::{AlignShootConfig, AlignShootController};
pub use runner::{CommandRunner, RunnerStatus};
pub use traits::Command;
pub use types::{AxisInputs, CycleOutput, DriveCommand, DriveFlags, RotationSource, ShotCommand};
