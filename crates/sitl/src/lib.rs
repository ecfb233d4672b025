//! Software-in-the-loop harness for the align-and-shoot controller.
//!
//! Closes the loop around [`align_shoot_core`] with a simulated robot,
//! camera, and shooter so the controller can be exercised end to end on
//! the host.

pub mod bridge;
pub mod config;
pub mod error;
pub mod platform;
pub mod world;

pub use bridge::{BridgeConfig, SimCommand, SimReport, SitlBridge, TimeMode};
pub use config::{list_parameters, load_controller_config, parse_override, ParameterInfo};
pub use error::SimulatorError;
pub use platform::{
    ScriptedSticks, SimCamera, SimDrivetrain, SimShooter, SimTelemetry, StickSegment,
};
pub use world::{Observation, Pose, SharedWorld, World, WorldConfig};
