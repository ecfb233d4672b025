//! Align-and-shoot command
//!
//! Binds [`AlignShootController`] to its collaborators. Each cycle samples
//! the sticks and the camera, runs the control law, and applies the result:
//! on-target flag, shooter, telemetry, and finally the drive command.
//!
//! The arm angle is looked up and published but not commanded; see
//! [`AlignShootCommand::hold_arm`].

use log::{debug, info, trace};

use super::controller::AlignShootController;
use super::traits::Command;
use super::types::{CycleOutput, ShotCommand};
use crate::traits::{AxisSource, Drivetrain, Shooter, Telemetry, VisionSource};
use crate::vision::{Pipeline, VisionSample};

/// Telemetry channel for the looked-up arm angle
pub const CHANNEL_DESIRED_ANGLE: &str = "Auto Shoot/Desired Angle";
/// Telemetry channel for the looked-up shooter RPM
pub const CHANNEL_DESIRED_RPM: &str = "Auto Shoot/Desired RPM";
/// Telemetry channel for the measured range
pub const CHANNEL_DISTANCE: &str = "DIST";

/// Align to the target while driving and spin up the shooter for its range
///
/// Runs until cancelled. Manual rotation is ignored whenever the target is
/// visible.
pub struct AlignShootCommand<A, V, D, S, T> {
    controller: AlignShootController,
    axes: A,
    vision: V,
    drivetrain: D,
    shooter: S,
    telemetry: T,
    last_output: Option<CycleOutput>,
}

impl<A, V, D, S, T> AlignShootCommand<A, V, D, S, T>
where
    A: AxisSource,
    V: VisionSource,
    D: Drivetrain,
    S: Shooter,
    T: Telemetry,
{
    /// Create the command
    pub fn new(
        controller: AlignShootController,
        axes: A,
        vision: V,
        drivetrain: D,
        shooter: S,
        telemetry: T,
    ) -> Self {
        Self {
            controller,
            axes,
            vision,
            drivetrain,
            shooter,
            telemetry,
            last_output: None,
        }
    }

    /// Read this cycle's target observation
    ///
    /// Bearing and range are only queried while the target is visible.
    fn sample_vision(&self) -> VisionSample {
        if !self.vision.target_visible() {
            return VisionSample::none();
        }
        let camera = self.controller.config().camera;
        VisionSample::visible(
            self.vision.bearing_error_deg(camera),
            self.vision.range_m(camera),
        )
    }

    fn apply(&mut self, output: &CycleOutput) {
        if let Some(on_target) = output.on_target {
            self.drivetrain.set_on_target(on_target);
        }

        if let Some(shot) = output.shot {
            self.hold_arm(&shot);
            self.shooter
                .set_commanded_rpm(shot.parameters.shooter_rpm);
            self.shooter.run_shooter();

            self.telemetry
                .publish(CHANNEL_DESIRED_ANGLE, shot.parameters.arm_angle_deg);
            self.telemetry
                .publish(CHANNEL_DESIRED_RPM, shot.parameters.shooter_rpm);
            self.telemetry.publish(CHANNEL_DISTANCE, shot.range_m);
        }

        self.drivetrain.drive(output.drive, output.flags);
    }

    /// Arm goal for the looked-up angle
    ///
    /// Intentionally does not command the arm: the angle is computed and
    /// published, while arm position stays under the arm's own control.
    fn hold_arm(&self, shot: &ShotCommand) {
        trace!(
            "Arm goal {} deg at {} m not applied",
            shot.parameters.arm_angle_deg,
            shot.range_m
        );
    }

    /// Output of the most recent cycle
    pub fn last_output(&self) -> Option<&CycleOutput> {
        self.last_output.as_ref()
    }

    /// Underlying control law
    pub fn controller(&self) -> &AlignShootController {
        &self.controller
    }

    /// Stick source
    pub fn axes_mut(&mut self) -> &mut A {
        &mut self.axes
    }

    /// Camera
    pub fn vision(&self) -> &V {
        &self.vision
    }

    /// Camera (mutable)
    pub fn vision_mut(&mut self) -> &mut V {
        &mut self.vision
    }

    /// Drivetrain
    pub fn drivetrain(&self) -> &D {
        &self.drivetrain
    }

    /// Shooter
    pub fn shooter(&self) -> &S {
        &self.shooter
    }

    /// Telemetry sink
    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }
}

impl<A, V, D, S, T> Command for AlignShootCommand<A, V, D, S, T>
where
    A: AxisSource,
    V: VisionSource,
    D: Drivetrain,
    S: Shooter,
    T: Telemetry,
{
    fn start(&mut self) {
        self.controller.start();
        self.last_output = None;
        self.vision.select_pipeline(Pipeline::AlignToTarget);
        info!("{} started", self.name());
    }

    fn step(&mut self, dt: f32) {
        let axes = self.axes.sample();
        let sample = self.sample_vision();
        let output = self.controller.step(axes, sample, dt);

        let was_visible = self.last_output.map(|o| o.target_visible());
        match (was_visible, output.target_visible()) {
            (Some(false) | None, true) => {
                debug!(
                    "Target acquired: bearing {} deg, range {} m",
                    sample.bearing_error_deg, sample.range_m
                );
            }
            (Some(true), false) => debug!("Target lost"),
            _ => {}
        }
        trace!("{:?}", output);

        self.apply(&output);
        self.last_output = Some(output);
    }

    fn stop(&mut self, interrupted: bool) {
        self.vision.select_pipeline(Pipeline::AllTags);
        info!("{} stopped (interrupted: {})", self.name(), interrupted);
    }

    fn name(&self) -> &'static str {
        "AlignShoot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{AlignShootConfig, DriveCommand, DriveFlags};
    use crate::shot::ShotTables;
    use crate::traits::{MockAxes, MockDrivetrain, MockShooter, MockTelemetry, MockVision};

    type MockCommand =
        AlignShootCommand<MockAxes, MockVision, MockDrivetrain, MockShooter, MockTelemetry>;

    const DT: f32 = 0.02;

    fn command() -> MockCommand {
        AlignShootCommand::new(
            AlignShootController::new(AlignShootConfig::default(), ShotTables::default()),
            MockAxes::new(),
            MockVision::new(),
            MockDrivetrain::new(),
            MockShooter::new(),
            MockTelemetry::new(),
        )
    }

    #[test]
    fn test_start_and_stop_switch_pipelines() {
        let mut cmd = command();
        cmd.start();
        assert_eq!(cmd.vision().active_pipeline(), Some(Pipeline::AlignToTarget));
        cmd.stop(false);
        assert_eq!(cmd.vision().active_pipeline(), Some(Pipeline::AllTags));

        cmd.start();
        cmd.stop(true);
        assert_eq!(
            cmd.vision().pipelines(),
            &[
                Pipeline::AlignToTarget,
                Pipeline::AllTags,
                Pipeline::AlignToTarget,
                Pipeline::AllTags
            ]
        );
    }

    #[test]
    fn test_never_finishes() {
        let mut cmd = command();
        cmd.start();
        for _ in 0..50 {
            cmd.step(DT);
            assert!(!cmd.is_finished());
        }
    }

    #[test]
    fn test_no_target_issues_only_drive() {
        let mut cmd = command();
        cmd.start();
        cmd.step(DT);

        assert_eq!(cmd.drivetrain().drive_count(), 1);
        assert_eq!(
            cmd.drivetrain().last_drive(),
            Some((DriveCommand::zero(), DriveFlags::ROBOT_RELATIVE_OPEN_LOOP))
        );
        assert_eq!(cmd.drivetrain().on_target_count(), 0);
        assert_eq!(cmd.shooter().call_count(), 0);
        assert_eq!(cmd.telemetry().publish_count(), 0);
        assert_eq!(cmd.vision().read_count(), 0);
    }

    #[test]
    fn test_visible_target_drives_shooter_and_telemetry() {
        let mut cmd = command();
        cmd.vision_mut().set_target(0.05, 2.5);
        cmd.start();
        cmd.step(DT);

        let tables = ShotTables::default();
        let expected = tables.lookup(2.5);

        assert_eq!(cmd.drivetrain().last_on_target(), Some(true));
        assert_eq!(cmd.shooter().commanded_rpm(), Some(expected.shooter_rpm));
        assert!(cmd.shooter().is_running());
        assert_eq!(
            cmd.telemetry().latest(CHANNEL_DESIRED_ANGLE),
            Some(expected.arm_angle_deg)
        );
        assert_eq!(
            cmd.telemetry().latest(CHANNEL_DESIRED_RPM),
            Some(expected.shooter_rpm)
        );
        assert_eq!(cmd.telemetry().latest(CHANNEL_DISTANCE), Some(2.5));
        assert_eq!(cmd.telemetry().publish_count(), 3);
        assert_eq!(cmd.drivetrain().drive_count(), 1);
    }

    #[test]
    fn test_off_target_reported() {
        let mut cmd = command();
        cmd.vision_mut().set_target(0.2, 2.5);
        cmd.start();
        cmd.step(DT);
        assert_eq!(cmd.drivetrain().last_on_target(), Some(false));
    }

    #[test]
    fn test_target_lost_stops_shot_updates() {
        let mut cmd = command();
        cmd.vision_mut().set_target(1.0, 3.0);
        cmd.start();
        cmd.step(DT);
        cmd.vision_mut().clear_target();
        cmd.step(DT);
        cmd.step(DT);

        assert_eq!(cmd.shooter().rpm_calls(), 1);
        assert_eq!(cmd.drivetrain().on_target_count(), 1);
        assert_eq!(cmd.drivetrain().drive_count(), 3);
        assert_eq!(
            cmd.last_output().map(|o| o.target_visible()),
            Some(false)
        );
    }

    #[test]
    fn test_manual_rotation_ignored_with_target() {
        let mut cmd = command();
        cmd.axes_mut().set(0.0, 0.0, 1.0);
        cmd.vision_mut().set_target(0.0, 2.0);
        cmd.start();
        cmd.step(DT);
        let (drive, _) = cmd.drivetrain().last_drive().unwrap();
        assert_eq!(drive.rotation_radps, 0.0);
    }
}
