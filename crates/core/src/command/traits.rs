//! Command trait definition
//!
//! Platform-agnostic interface for periodic commands driven by a host
//! scheduler.

/// Periodic command
///
/// # Lifecycle
///
/// 1. `start()` - Called once when the command is scheduled
/// 2. `step(dt)` - Called once per control cycle while scheduled
/// 3. `stop(interrupted)` - Called exactly once when the command ends,
///    with `interrupted = true` if it was cancelled
///
/// Commands never fail mid-cycle; every cycle is best effort.
pub trait Command {
    /// Prepare for the first cycle
    fn start(&mut self);

    /// Run one cycle
    ///
    /// # Arguments
    ///
    /// * `dt` - Delta time since last cycle (seconds)
    fn step(&mut self, dt: f32);

    /// Release resources and restore collaborator state
    fn stop(&mut self, interrupted: bool);

    /// True once the command has nothing left to do
    ///
    /// Defaults to never finishing; such commands run until cancelled.
    fn is_finished(&self) -> bool {
        false
    }

    /// Command name for logging and telemetry
    fn name(&self) -> &'static str;
}
