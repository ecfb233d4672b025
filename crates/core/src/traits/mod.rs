//! Collaborator traits for the align-and-shoot controller.
//!
//! The controller never touches hardware directly. Stick input, the vision
//! camera, the drivetrain, the shooter, and the dashboard are reached
//! through the traits in this module.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Simulated implementations live in the sitl crate

pub mod drivetrain;
pub mod input;
pub mod shooter;
pub mod telemetry;
pub mod vision;

pub use drivetrain::{Drivetrain, MockDrivetrain};
pub use input::{AxisSource, MockAxes};
pub use shooter::{MockShooter, Shooter};
pub use telemetry::{MockTelemetry, Telemetry};
pub use vision::{MockVision, VisionSource};

/// Number of calls each mock keeps for inspection
///
/// Later calls are still counted but not stored.
pub const MOCK_HISTORY: usize = 128;
