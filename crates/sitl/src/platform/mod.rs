//! Simulated collaborators for SITL.
//!
//! Each type implements one of the core collaborator traits on top of a
//! [`SharedWorld`]. They hold no state of their own apart from the stick
//! script; everything they observe or command lives in the world.

pub mod sticks;

pub use sticks::{ScriptedSticks, StickSegment};

use align_shoot_core::command::{DriveCommand, DriveFlags};
use align_shoot_core::traits::{Drivetrain, Shooter, Telemetry, VisionSource};
use align_shoot_core::vision::{CameraId, Pipeline};
use log::debug;

use crate::world::SharedWorld;

/// Simulated camera reading the world's current frame.
pub struct SimCamera {
    world: SharedWorld,
}

impl SimCamera {
    /// Create a camera on `world`.
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }
}

impl VisionSource for SimCamera {
    fn target_visible(&self) -> bool {
        self.world.borrow().observation().is_some()
    }

    fn bearing_error_deg(&self, _camera: CameraId) -> f32 {
        self.world
            .borrow()
            .observation()
            .map(|o| o.bearing_error_deg)
            .unwrap_or(0.0)
    }

    fn range_m(&self, _camera: CameraId) -> f32 {
        self.world
            .borrow()
            .observation()
            .map(|o| o.range_m)
            .unwrap_or(0.0)
    }

    fn select_pipeline(&mut self, pipeline: Pipeline) {
        self.world.borrow_mut().select_pipeline(pipeline);
    }
}

/// Simulated drivetrain applying commands to the world robot.
pub struct SimDrivetrain {
    world: SharedWorld,
}

impl SimDrivetrain {
    /// Create a drivetrain on `world`.
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }
}

impl Drivetrain for SimDrivetrain {
    fn drive(&mut self, command: DriveCommand, flags: DriveFlags) {
        self.world.borrow_mut().apply_drive(command, flags);
    }

    fn set_on_target(&mut self, on_target: bool) {
        self.world.borrow_mut().set_on_target(on_target);
    }
}

/// Simulated shooter driving the world flywheel.
pub struct SimShooter {
    world: SharedWorld,
}

impl SimShooter {
    /// Create a shooter on `world`.
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }
}

impl Shooter for SimShooter {
    fn set_commanded_rpm(&mut self, rpm: f32) {
        self.world.borrow_mut().set_commanded_rpm(rpm);
    }

    fn run_shooter(&mut self) {
        self.world.borrow_mut().run_shooter();
    }
}

/// Dashboard stand-in: keeps the latest value per channel and logs it.
pub struct SimTelemetry {
    world: SharedWorld,
}

impl SimTelemetry {
    /// Create a telemetry sink on `world`.
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }
}

impl Telemetry for SimTelemetry {
    fn publish(&mut self, channel: &'static str, value: f32) {
        debug!("{} = {}", channel, value);
        self.world.borrow_mut().publish(channel, value);
    }
}
