//! Per-cycle input and output types

use crate::shot::ShotParameters;

/// Normalized stick axes for one cycle, each nominally in `[-1, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisInputs {
    /// Forward/backward (positive = forward)
    pub forward: f32,
    /// Left/right (positive = left)
    pub strafe: f32,
    /// Yaw (positive = counter-clockwise)
    pub rotation: f32,
}

impl AxisInputs {
    /// Create axis inputs
    pub const fn new(forward: f32, strafe: f32, rotation: f32) -> Self {
        Self {
            forward,
            strafe,
            rotation,
        }
    }

    /// All axes centred
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Drivetrain velocity command in physical units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DriveCommand {
    /// Forward velocity (m/s)
    pub forward_mps: f32,
    /// Strafe velocity (m/s)
    pub strafe_mps: f32,
    /// Rotation rate (rad/s, positive = counter-clockwise)
    pub rotation_radps: f32,
}

impl DriveCommand {
    /// Stationary command
    pub const fn zero() -> Self {
        Self {
            forward_mps: 0.0,
            strafe_mps: 0.0,
            rotation_radps: 0.0,
        }
    }
}

/// Drive-mode flags passed verbatim with every drive command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveFlags {
    /// Velocities are in the field frame (false = robot frame)
    pub field_relative: bool,
    /// Open-loop wheel speed control
    pub open_loop: bool,
    /// Hold the current heading when rotation is zero
    pub heading_lock: bool,
}

impl DriveFlags {
    /// Robot-relative, open-loop, no heading lock
    pub const ROBOT_RELATIVE_OPEN_LOOP: DriveFlags = DriveFlags {
        field_relative: false,
        open_loop: true,
        heading_lock: false,
    };
}

impl Default for DriveFlags {
    fn default() -> Self {
        Self::ROBOT_RELATIVE_OPEN_LOOP
    }
}

/// Where the rotation output of a cycle came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationSource {
    /// Rate-limited stick rotation
    Manual,
    /// Alignment PID output; stick rotation ignored
    VisionCorrected,
}

/// Shot setpoints derived from the measured range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotCommand {
    /// Range the setpoints were looked up at (m)
    pub range_m: f32,
    /// Arm angle and shooter RPM for that range
    pub parameters: ShotParameters,
}

/// Everything one control cycle produces
///
/// `on_target` and `shot` are `Some` only on cycles where the target was
/// visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleOutput {
    /// Scaled drive command
    pub drive: DriveCommand,
    /// Drive-mode flags
    pub flags: DriveFlags,
    /// Origin of the rotation component
    pub rotation_source: RotationSource,
    /// Bearing error within tolerance
    pub on_target: Option<bool>,
    /// Shooter/arm setpoints
    pub shot: Option<ShotCommand>,
}

impl CycleOutput {
    /// True if the cycle saw the target
    pub fn target_visible(&self) -> bool {
        self.rotation_source == RotationSource::VisionCorrected
    }
}
