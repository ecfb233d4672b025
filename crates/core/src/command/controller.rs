//! Align-and-shoot control law
//!
//! Pure per-cycle computation with no collaborator access. Given the raw
//! stick axes and this cycle's vision sample it produces the drive command,
//! the on-target flag, and the shot setpoints.
//!
//! # Cycle
//!
//! 1. Deadband each axis, then slew-limit it. All three limiters advance
//!    every cycle.
//! 2. A sample without a finite bearing counts as no target.
//! 3. With a visible target the rotation axis is replaced by the alignment
//!    PID output driving bearing error to zero, and shot setpoints are
//!    looked up from range.
//! 4. Axes are scaled to physical units.

use libm::fabsf;

use super::types::{
    AxisInputs, CycleOutput, DriveCommand, DriveFlags, RotationSource, ShotCommand,
};
use crate::control::{PidController, PidGains};
use crate::filter::{apply_deadband, SlewRateLimiter};
use crate::shot::ShotTables;
use crate::vision::{CameraId, VisionSample};

/// Controller tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignShootConfig {
    /// Stick dead-zone half width
    pub stick_deadband: f32,
    /// Stick slew rate (units/s)
    pub slew_rate: f32,
    /// Linear speed at full stick (m/s)
    pub max_speed_mps: f32,
    /// Angular velocity at full stick (rad/s)
    pub max_angular_radps: f32,
    /// Alignment PID gains (output per degree of bearing error)
    pub align_gains: PidGains,
    /// Bearing error below which the robot counts as on target (degrees)
    pub on_target_tolerance_deg: f32,
    /// Nominal control period (s)
    pub period_s: f32,
    /// Camera used for bearing and range
    pub camera: CameraId,
    /// Flags sent with every drive command
    pub drive_flags: DriveFlags,
}

impl Default for AlignShootConfig {
    fn default() -> Self {
        Self {
            stick_deadband: 0.1,
            slew_rate: 3.0,
            max_speed_mps: 4.5,
            max_angular_radps: 10.0,
            align_gains: PidGains::new(0.03, 0.0, 0.0),
            on_target_tolerance_deg: 0.1,
            period_s: 0.02,
            camera: CameraId::FRONT_LEFT,
            drive_flags: DriveFlags::ROBOT_RELATIVE_OPEN_LOOP,
        }
    }
}

/// Align-and-shoot controller state
///
/// Holds one slew limiter per axis and the alignment PID. No target lock
/// is retained between cycles.
#[derive(Debug, Clone)]
pub struct AlignShootController {
    config: AlignShootConfig,
    tables: ShotTables,
    forward_limiter: SlewRateLimiter,
    strafe_limiter: SlewRateLimiter,
    rotation_limiter: SlewRateLimiter,
    align_pid: PidController,
}

impl AlignShootController {
    /// Create a controller
    pub fn new(config: AlignShootConfig, tables: ShotTables) -> Self {
        Self {
            config,
            tables,
            forward_limiter: SlewRateLimiter::new(config.slew_rate),
            strafe_limiter: SlewRateLimiter::new(config.slew_rate),
            rotation_limiter: SlewRateLimiter::new(config.slew_rate),
            align_pid: PidController::new(config.align_gains, config.period_s),
        }
    }

    /// Clear limiter and PID history for a new activation
    pub fn start(&mut self) {
        self.forward_limiter.reset(0.0);
        self.strafe_limiter.reset(0.0);
        self.rotation_limiter.reset(0.0);
        self.align_pid.reset();
    }

    /// Run one control cycle
    ///
    /// # Arguments
    ///
    /// * `axes` - Raw stick axes
    /// * `vision` - This cycle's target observation
    /// * `dt` - Time since the previous cycle (seconds)
    pub fn step(&mut self, axes: AxisInputs, vision: VisionSample, dt: f32) -> CycleOutput {
        let deadband = self.config.stick_deadband;
        let forward = self
            .forward_limiter
            .calculate(apply_deadband(axes.forward, deadband), dt);
        let strafe = self
            .strafe_limiter
            .calculate(apply_deadband(axes.strafe, deadband), dt);
        let manual_rotation = self
            .rotation_limiter
            .calculate(apply_deadband(axes.rotation, deadband), dt);

        let (rotation, rotation_source, on_target, shot) = if vision.visible
            && vision.bearing_error_deg.is_finite()
        {
            let correction = self.align_pid.calculate(vision.bearing_error_deg, 0.0);
            let on_target = fabsf(vision.bearing_error_deg) < self.config.on_target_tolerance_deg;
            let shot = ShotCommand {
                range_m: vision.range_m,
                parameters: self.tables.lookup(vision.range_m),
            };
            (
                correction,
                RotationSource::VisionCorrected,
                Some(on_target),
                Some(shot),
            )
        } else {
            (manual_rotation, RotationSource::Manual, None, None)
        };

        CycleOutput {
            drive: DriveCommand {
                forward_mps: forward * self.config.max_speed_mps,
                strafe_mps: strafe * self.config.max_speed_mps,
                rotation_radps: rotation * self.config.max_angular_radps,
            },
            flags: self.config.drive_flags,
            rotation_source,
            on_target,
            shot,
        }
    }

    /// Current tuning
    pub fn config(&self) -> &AlignShootConfig {
        &self.config
    }

    /// Shot lookup tables
    pub fn tables(&self) -> &ShotTables {
        &self.tables
    }
}
