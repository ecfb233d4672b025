use std::fmt;

use align_shoot_core::vision::Pipeline;

use crate::world::Pose;

/// Summary of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimReport {
    /// Control cycles executed.
    pub cycles: u64,
    /// Simulated time at the end of the run (seconds).
    pub sim_time_s: f32,
    /// Cycles on which the target was visible.
    pub vision_cycles: u64,
    /// First time the drivetrain was told it was on target (seconds).
    pub first_on_target_s: Option<f32>,
    /// Robot pose at the end of the run.
    pub final_pose: Pose,
    /// Noise-free bearing error at the end of the run (degrees).
    pub final_bearing_error_deg: f32,
    /// Noise-free range at the end of the run (meters).
    pub final_range_m: f32,
    /// Last on-target report.
    pub on_target: Option<bool>,
    /// Last commanded flywheel speed.
    pub commanded_rpm: Option<f32>,
    /// Flywheel speed at the end of the run.
    pub flywheel_rpm: f32,
    /// Last published arm angle (not applied to the arm).
    pub desired_angle_deg: Option<f32>,
    /// Camera pipelines selected, oldest first.
    pub pipelines: Vec<Pipeline>,
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Cycles: {} ({:.2} s simulated, target visible on {})",
            self.cycles, self.sim_time_s, self.vision_cycles
        )?;
        match self.first_on_target_s {
            Some(t) => writeln!(f, "First on target: {:.2} s", t)?,
            None => writeln!(f, "First on target: never")?,
        }
        writeln!(
            f,
            "Final pose: x={:.3} m y={:.3} m heading={:.2} deg",
            self.final_pose.x,
            self.final_pose.y,
            self.final_pose.heading_rad.to_degrees()
        )?;
        writeln!(
            f,
            "Final bearing error: {:.3} deg, range: {:.3} m",
            self.final_bearing_error_deg, self.final_range_m
        )?;
        match self.commanded_rpm {
            Some(rpm) => writeln!(
                f,
                "Shooter: commanded {:.0} RPM, flywheel {:.0} RPM",
                rpm, self.flywheel_rpm
            )?,
            None => writeln!(f, "Shooter: never commanded")?,
        }
        if let Some(angle) = self.desired_angle_deg {
            writeln!(f, "Desired arm angle: {:.1} deg (not applied)", angle)?;
        }
        write!(f, "Pipelines: {:?}", self.pipelines)
    }
}
