//! Shooter abstraction

/// Flywheel shooter.
pub trait Shooter {
    /// Set the flywheel speed target (RPM)
    fn set_commanded_rpm(&mut self, rpm: f32);

    /// Start spinning toward the commanded speed
    fn run_shooter(&mut self);
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock shooter tracking the last command.
#[derive(Debug, Clone, Default)]
pub struct MockShooter {
    commanded_rpm: Option<f32>,
    running: bool,
    rpm_calls: usize,
    run_calls: usize,
}

impl MockShooter {
    /// Creates an idle shooter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last commanded RPM, if any.
    pub fn commanded_rpm(&self) -> Option<f32> {
        self.commanded_rpm
    }

    /// True once `run_shooter` has been called.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of `set_commanded_rpm` calls.
    pub fn rpm_calls(&self) -> usize {
        self.rpm_calls
    }

    /// Number of `run_shooter` calls.
    pub fn run_calls(&self) -> usize {
        self.run_calls
    }

    /// Total shooter calls of either kind.
    pub fn call_count(&self) -> usize {
        self.rpm_calls + self.run_calls
    }
}

impl Shooter for MockShooter {
    fn set_commanded_rpm(&mut self, rpm: f32) {
        self.rpm_calls += 1;
        self.commanded_rpm = Some(rpm);
    }

    fn run_shooter(&mut self) {
        self.run_calls += 1;
        self.running = true;
    }
}
