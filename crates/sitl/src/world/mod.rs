//! Simulated field: robot kinematics, camera, and shooter flywheel.
//!
//! The world advances in fixed steps. Each step first refreshes the camera
//! observation from the current pose, so every collaborator read within a
//! control cycle sees the same frame.

use std::cell::RefCell;
use std::collections::HashMap;
use std::f32::consts::PI;
use std::rc::Rc;

use align_shoot_core::command::{DriveCommand, DriveFlags};
use align_shoot_core::vision::{CameraMount, Pipeline};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// World shared between the simulated collaborators
pub type SharedWorld = Rc<RefCell<World>>;

/// Planar robot pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// X position in meters.
    pub x: f32,
    /// Y position in meters.
    pub y: f32,
    /// Heading in radians (0 = +x, counter-clockwise positive).
    pub heading_rad: f32,
}

/// Configuration for the simulated world.
#[derive(Debug, Clone)]
pub struct WorldConfig {
    /// Robot pose at time zero.
    pub start: Pose,
    /// Target X position in meters.
    pub target_x: f32,
    /// Target Y position in meters.
    pub target_y: f32,
    /// Camera mounting geometry used for range synthesis.
    pub mount: CameraMount,
    /// Half of the camera's horizontal field of view in degrees.
    pub half_fov_deg: f32,
    /// Farthest range at which the target is detected.
    pub max_range_m: f32,
    /// Closest range at which the target is detected.
    pub min_range_m: f32,
    /// Bearing noise standard deviation in degrees.
    pub bearing_noise_deg: f32,
    /// Vertical offset noise standard deviation in degrees.
    pub elevation_noise_deg: f32,
    /// Flywheel spin-up time constant in seconds.
    pub flywheel_time_constant_s: f32,
    /// RNG seed for deterministic mode. None = random.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            start: Pose {
                x: -3.0,
                y: 0.5,
                heading_rad: 0.0,
            },
            target_x: 0.0,
            target_y: 0.0,
            mount: CameraMount::default(),
            half_fov_deg: 29.8,
            max_range_m: 6.0,
            min_range_m: 0.3,
            bearing_noise_deg: 0.02,
            elevation_noise_deg: 0.02,
            flywheel_time_constant_s: 0.3,
            seed: None,
        }
    }
}

/// Camera frame for one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Horizontal offset to the target in degrees (positive = right).
    pub bearing_error_deg: f32,
    /// Range estimated from the target's vertical offset.
    pub range_m: f32,
}

/// Flywheel state.
#[derive(Debug, Clone, Copy, Default)]
struct Flywheel {
    commanded_rpm: Option<f32>,
    running: bool,
    rpm: f32,
}

/// Simulated robot and field.
pub struct World {
    config: WorldConfig,
    pose: Pose,
    command: DriveCommand,
    flags: DriveFlags,
    time_us: u64,
    rng: StdRng,
    observation: Option<Observation>,
    pipelines: Vec<Pipeline>,
    flywheel: Flywheel,
    on_target: Option<bool>,
    telemetry: HashMap<&'static str, f32>,
    drive_count: u64,
}

impl World {
    /// Create a world with the robot at its start pose.
    pub fn new(config: WorldConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            pose: config.start,
            config,
            command: DriveCommand::zero(),
            flags: DriveFlags::default(),
            time_us: 0,
            rng,
            observation: None,
            pipelines: Vec::new(),
            flywheel: Flywheel::default(),
            on_target: None,
            telemetry: HashMap::new(),
            drive_count: 0,
        }
    }

    /// Wrap in a shared handle.
    pub fn shared(config: WorldConfig) -> SharedWorld {
        Rc::new(RefCell::new(Self::new(config)))
    }

    /// Capture the camera frame for the current pose.
    pub fn observe(&mut self) {
        let range = self.true_range();
        let bearing = self.true_bearing_error_deg();

        if range < self.config.min_range_m
            || range > self.config.max_range_m
            || bearing.abs() > self.config.half_fov_deg
        {
            self.observation = None;
            return;
        }

        let mount = self.config.mount;
        let rise = mount.target_height_m - mount.lens_height_m;
        let vertical_offset_deg = rise.atan2(range).to_degrees() - mount.pitch_deg
            + self.gaussian_noise(self.config.elevation_noise_deg);
        let bearing_error_deg = bearing + self.gaussian_noise(self.config.bearing_noise_deg);

        self.observation = mount
            .range_from_vertical_offset(vertical_offset_deg)
            .map(|range_m| Observation {
                bearing_error_deg,
                range_m,
            });
    }

    /// Integrate robot and flywheel over one step.
    pub fn advance(&mut self, dt_us: u64) {
        let dt = dt_us as f32 / 1_000_000.0;

        let (vx, vy) = if self.flags.field_relative {
            (self.command.forward_mps, self.command.strafe_mps)
        } else {
            let (sin, cos) = self.pose.heading_rad.sin_cos();
            (
                self.command.forward_mps * cos - self.command.strafe_mps * sin,
                self.command.forward_mps * sin + self.command.strafe_mps * cos,
            )
        };
        self.pose.x += vx * dt;
        self.pose.y += vy * dt;
        self.pose.heading_rad =
            normalize_angle(self.pose.heading_rad + self.command.rotation_radps * dt);

        let target_rpm = match (self.flywheel.running, self.flywheel.commanded_rpm) {
            (true, Some(rpm)) => rpm,
            _ => 0.0,
        };
        let tau = self.config.flywheel_time_constant_s.max(dt);
        self.flywheel.rpm += (target_rpm - self.flywheel.rpm) * (dt / tau);

        self.time_us += dt_us;
        trace!("t={} us pose={:?}", self.time_us, self.pose);
    }

    /// Horizontal distance from the robot to the target.
    pub fn true_range(&self) -> f32 {
        (self.config.target_x - self.pose.x).hypot(self.config.target_y - self.pose.y)
    }

    /// Noise-free bearing error in degrees (positive = target to the right).
    pub fn true_bearing_error_deg(&self) -> f32 {
        let world_bearing =
            (self.config.target_y - self.pose.y).atan2(self.config.target_x - self.pose.x);
        -normalize_angle(world_bearing - self.pose.heading_rad).to_degrees()
    }

    /// Generate Gaussian noise using Box-Muller transform.
    fn gaussian_noise(&mut self, stddev: f32) -> f32 {
        if stddev == 0.0 {
            return 0.0;
        }
        let u1: f32 = self.rng.gen::<f32>().max(f32::EPSILON);
        let u2: f32 = self.rng.gen();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        z * stddev
    }

    // --- Collaborator hooks ---

    pub(crate) fn select_pipeline(&mut self, pipeline: Pipeline) {
        debug!("Camera pipeline -> {:?} (index {})", pipeline, pipeline.index());
        self.pipelines.push(pipeline);
    }

    pub(crate) fn apply_drive(&mut self, command: DriveCommand, flags: DriveFlags) {
        self.command = command;
        self.flags = flags;
        self.drive_count += 1;
    }

    pub(crate) fn set_on_target(&mut self, on_target: bool) {
        self.on_target = Some(on_target);
    }

    pub(crate) fn set_commanded_rpm(&mut self, rpm: f32) {
        self.flywheel.commanded_rpm = Some(rpm);
    }

    pub(crate) fn run_shooter(&mut self) {
        self.flywheel.running = true;
    }

    pub(crate) fn publish(&mut self, channel: &'static str, value: f32) {
        self.telemetry.insert(channel, value);
    }

    // --- Accessors ---

    /// Current pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Simulated time in microseconds.
    pub fn time_us(&self) -> u64 {
        self.time_us
    }

    /// Simulated time in seconds.
    pub fn time_s(&self) -> f32 {
        self.time_us as f32 / 1_000_000.0
    }

    /// Camera frame from the last `observe`.
    pub fn observation(&self) -> Option<Observation> {
        self.observation
    }

    /// Pipelines selected so far, oldest first.
    pub fn pipelines(&self) -> &[Pipeline] {
        &self.pipelines
    }

    /// Last drive command received.
    pub fn last_drive(&self) -> (DriveCommand, DriveFlags) {
        (self.command, self.flags)
    }

    /// Number of drive commands received.
    pub fn drive_count(&self) -> u64 {
        self.drive_count
    }

    /// Last on-target report.
    pub fn on_target(&self) -> Option<bool> {
        self.on_target
    }

    /// Last commanded flywheel speed.
    pub fn commanded_rpm(&self) -> Option<f32> {
        self.flywheel.commanded_rpm
    }

    /// Current flywheel speed.
    pub fn flywheel_rpm(&self) -> f32 {
        self.flywheel.rpm
    }

    /// True once the shooter was told to run.
    pub fn shooter_running(&self) -> bool {
        self.flywheel.running
    }

    /// Latest value published on `channel`.
    pub fn telemetry(&self, channel: &str) -> Option<f32> {
        self.telemetry.get(channel).copied()
    }
}

/// Normalize angle to [-pi, pi].
fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % (2.0 * PI);
    if a > PI {
        a -= 2.0 * PI;
    } else if a < -PI {
        a += 2.0 * PI;
    }
    a
}
