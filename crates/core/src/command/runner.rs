//! Command runner
//!
//! Drives a [`Command`] through its lifecycle from a host loop.
//!
//! ## Responsibilities
//!
//! - Start the command when scheduled
//! - Compute delta time from timestamps and step the command
//! - Stop the command exactly once, whether it finishes or is cancelled

use log::{info, warn};

use super::traits::Command;

/// Result of one [`CommandRunner::execute`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerStatus {
    /// Nothing scheduled; the command was not stepped
    Idle,
    /// Command stepped and still scheduled
    Running,
    /// Command stepped, reported finished, and was stopped
    Finished,
}

/// Lifecycle driver for a single command
///
/// Dropping a runner with an active command cancels it.
pub struct CommandRunner<C: Command> {
    command: C,
    nominal_period_s: f32,
    last_update_us: Option<u64>,
    active: bool,
    cycles: u64,
}

impl<C: Command> CommandRunner<C> {
    /// Create a runner
    ///
    /// # Arguments
    ///
    /// * `command` - Command to drive
    /// * `nominal_period_s` - Period assumed on the first cycle and whenever
    ///   timestamps do not advance
    pub fn new(command: C, nominal_period_s: f32) -> Self {
        Self {
            command,
            nominal_period_s: if nominal_period_s > 0.0 {
                nominal_period_s
            } else {
                0.02
            },
            last_update_us: None,
            active: false,
            cycles: 0,
        }
    }

    /// Start the command
    ///
    /// Returns `false` if it is already scheduled.
    pub fn schedule(&mut self, now_us: u64) -> bool {
        if self.active {
            warn!("{} already scheduled", self.command.name());
            return false;
        }

        info!("Scheduling {} at {} us", self.command.name(), now_us);
        self.command.start();
        self.active = true;
        self.last_update_us = None;
        self.cycles = 0;
        true
    }

    /// Step the command once (call at the control rate)
    ///
    /// # Arguments
    ///
    /// * `now_us` - Current timestamp in microseconds
    pub fn execute(&mut self, now_us: u64) -> RunnerStatus {
        if !self.active {
            return RunnerStatus::Idle;
        }

        let dt = match self.last_update_us {
            // First cycle: assume the nominal period
            None => self.nominal_period_s,
            Some(last) => match now_us.saturating_sub(last) {
                0 => self.nominal_period_s,
                delta_us => delta_us as f32 / 1_000_000.0,
            },
        };
        self.last_update_us = Some(now_us);

        self.command.step(dt);
        self.cycles += 1;

        if self.command.is_finished() {
            self.finish(false);
            RunnerStatus::Finished
        } else {
            RunnerStatus::Running
        }
    }

    /// Cancel the command
    ///
    /// Returns `false` if nothing was scheduled.
    pub fn cancel(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.finish(true);
        true
    }

    fn finish(&mut self, interrupted: bool) {
        self.active = false;
        self.command.stop(interrupted);
        info!(
            "{} ended after {} cycles{}",
            self.command.name(),
            self.cycles,
            if interrupted { " (cancelled)" } else { "" }
        );
    }

    /// True while the command is scheduled
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Cycles run in the current or most recent activation
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Driven command
    pub fn command(&self) -> &C {
        &self.command
    }

    /// Driven command (mutable)
    pub fn command_mut(&mut self) -> &mut C {
        &mut self.command
    }
}

impl<C: Command> Drop for CommandRunner<C> {
    fn drop(&mut self) {
        self.cancel();
    }
}
