//! Stick input abstraction

use crate::command::AxisInputs;

/// Source of the three driver axes.
///
/// Sampled once at the start of every control cycle. Implementations
/// return raw values; deadband and slew limiting are applied by the
/// controller.
pub trait AxisSource {
    /// Read forward, strafe, and rotation for this cycle
    fn sample(&mut self) -> AxisInputs;
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock axis source returning a settable value.
///
/// # Example
///
/// ```
/// use align_shoot_core::traits::{AxisSource, MockAxes};
///
/// let mut axes = MockAxes::new();
/// axes.set(1.0, 0.0, -0.5);
/// let sample = axes.sample();
/// assert_eq!(sample.forward, 1.0);
/// assert_eq!(axes.sample_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockAxes {
    current: AxisInputs,
    samples: usize,
}

impl MockAxes {
    /// Creates a mock with all axes centred.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value returned by the next samples.
    pub fn set(&mut self, forward: f32, strafe: f32, rotation: f32) {
        self.current = AxisInputs::new(forward, strafe, rotation);
    }

    /// Number of times the axes were sampled.
    pub fn sample_count(&self) -> usize {
        self.samples
    }
}

impl AxisSource for MockAxes {
    fn sample(&mut self) -> AxisInputs {
        self.samples += 1;
        self.current
    }
}
