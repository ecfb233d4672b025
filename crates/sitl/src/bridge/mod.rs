//! Simulation driver.
//!
//! Runs the align-and-shoot command against the simulated world, either as
//! fast as possible or paced against wall-clock time, and summarizes each
//! activation in a [`SimReport`].

pub mod report;
pub mod time;

use std::cell::Ref;
use std::time::Duration;

use align_shoot_core::command::{
    AlignShootCommand, AlignShootConfig, AlignShootController, CommandRunner, RunnerStatus,
    CHANNEL_DESIRED_ANGLE,
};
use align_shoot_core::shot::ShotTables;
use log::info;

pub use report::SimReport;
pub use time::TimeMode;

use crate::error::SimulatorError;
use crate::platform::{
    ScriptedSticks, SimCamera, SimDrivetrain, SimShooter, SimTelemetry, StickSegment,
};
use crate::world::{SharedWorld, World, WorldConfig};

/// Align-and-shoot command wired to the simulated collaborators
pub type SimCommand =
    AlignShootCommand<ScriptedSticks, SimCamera, SimDrivetrain, SimShooter, SimTelemetry>;

/// Configuration for one simulation run.
#[derive(Debug, Clone, Default)]
pub struct BridgeConfig {
    /// Controller tuning; its period is also the simulation step.
    pub controller: AlignShootConfig,
    /// Shot lookup tables.
    pub tables: ShotTables,
    /// Simulated field.
    pub world: WorldConfig,
    /// Driver stick script.
    pub sticks: Vec<StickSegment>,
    /// Time synchronization mode.
    pub time_mode: TimeMode,
}

/// SITL Bridge orchestrator.
///
/// Owns the simulated world and a runner for the align-and-shoot command.
/// Each cycle captures a camera frame, runs the command, then advances the
/// world by one control period.
pub struct SitlBridge {
    world: SharedWorld,
    runner: CommandRunner<SimCommand>,
    time_mode: TimeMode,
    period_us: u64,
    vision_cycles: u64,
    first_on_target_s: Option<f32>,
    first_pipeline: usize,
}

impl SitlBridge {
    /// Build the world, collaborators, and command.
    pub fn new(config: BridgeConfig) -> Result<Self, SimulatorError> {
        let period_s = config.controller.period_s;
        if !(period_s > 0.0) {
            return Err(SimulatorError::InvalidConfig(format!(
                "control period must be positive, got {period_s}"
            )));
        }
        if let TimeMode::Scaled { factor } = config.time_mode {
            if !(factor > 0.0) {
                return Err(SimulatorError::InvalidConfig(format!(
                    "time scale factor must be positive, got {factor}"
                )));
            }
        }

        let world = World::shared(config.world);
        let controller = AlignShootController::new(config.controller, config.tables);
        let command = AlignShootCommand::new(
            controller,
            ScriptedSticks::new(world.clone(), config.sticks),
            SimCamera::new(world.clone()),
            SimDrivetrain::new(world.clone()),
            SimShooter::new(world.clone()),
            SimTelemetry::new(world.clone()),
        );

        Ok(Self {
            world,
            runner: CommandRunner::new(command, period_s),
            time_mode: config.time_mode,
            period_us: (period_s as f64 * 1_000_000.0).round() as u64,
            vision_cycles: 0,
            first_on_target_s: None,
            first_pipeline: 0,
        })
    }

    /// Schedule a new activation of the command.
    ///
    /// Report statistics start over from this point.
    pub fn start(&mut self) -> Result<(), SimulatorError> {
        let (now_us, pipelines) = {
            let world = self.world.borrow();
            (world.time_us(), world.pipelines().len())
        };
        if !self.runner.schedule(now_us) {
            return Err(SimulatorError::InvalidConfig(
                "command already running".to_string(),
            ));
        }
        self.vision_cycles = 0;
        self.first_on_target_s = None;
        // Pipeline selected by `schedule` belongs to this activation
        self.first_pipeline = pipelines;
        Ok(())
    }

    /// Run the command for `cycles` control periods, then cancel it.
    pub async fn run(&mut self, cycles: u64) -> Result<SimReport, SimulatorError> {
        self.start()?;
        info!(
            "Running {} cycles at {} us ({:?})",
            cycles, self.period_us, self.time_mode
        );

        match self.time_mode {
            TimeMode::Lockstep => {
                for _ in 0..cycles {
                    self.step();
                }
            }
            TimeMode::Scaled { factor } => {
                let wall_period =
                    Duration::from_secs_f64(self.period_us as f64 / 1_000_000.0 / factor as f64);
                let mut interval = tokio::time::interval(wall_period);
                for _ in 0..cycles {
                    interval.tick().await;
                    self.step();
                }
            }
        }

        self.stop();
        Ok(self.report())
    }

    /// Cancel the active command. Returns `false` if nothing was running.
    pub fn stop(&mut self) -> bool {
        self.runner.cancel()
    }

    /// Run one control cycle and advance the world.
    pub fn step(&mut self) {
        self.world.borrow_mut().observe();

        let now_us = self.world.borrow().time_us();
        if self.runner.execute(now_us) != RunnerStatus::Idle {
            if let Some(output) = self.runner.command().last_output() {
                if output.target_visible() {
                    self.vision_cycles += 1;
                }
                if self.first_on_target_s.is_none() && output.on_target == Some(true) {
                    self.first_on_target_s = Some(self.world.borrow().time_s());
                }
            }
        }

        self.world.borrow_mut().advance(self.period_us);
    }

    /// Summarize the current or most recent activation.
    pub fn report(&self) -> SimReport {
        let world = self.world.borrow();
        SimReport {
            cycles: self.runner.cycles(),
            sim_time_s: world.time_s(),
            vision_cycles: self.vision_cycles,
            first_on_target_s: self.first_on_target_s,
            final_pose: world.pose(),
            final_bearing_error_deg: world.true_bearing_error_deg(),
            final_range_m: world.true_range(),
            on_target: world.on_target(),
            commanded_rpm: world.commanded_rpm(),
            flywheel_rpm: world.flywheel_rpm(),
            desired_angle_deg: world.telemetry(CHANNEL_DESIRED_ANGLE),
            pipelines: world
                .pipelines()
                .get(self.first_pipeline..)
                .unwrap_or_default()
                .to_vec(),
        }
    }

    /// Simulated world.
    pub fn world(&self) -> Ref<'_, World> {
        self.world.borrow()
    }

    /// Command runner.
    pub fn runner(&self) -> &CommandRunner<SimCommand> {
        &self.runner
    }
}
