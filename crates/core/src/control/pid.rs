//! Fixed-period PID controller
//!
//! Discrete PID evaluated once per control cycle. The derivative and
//! integral terms use the configured period rather than a measured one, so
//! the controller is deterministic for a given input sequence.
//!
//! # Terms
//!
//! - Error = setpoint - measurement
//! - Integral accumulates `error * period` only when `ki != 0`, clamped to
//!   `[integrator_min, integrator_max]`
//! - Derivative = (error - previous error) / period; zero on the first cycle
//! - A non-finite measurement or setpoint yields 0.0 and leaves the history
//!   untouched

use libm::fabsf;

/// PID gains
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PidGains {
    /// Proportional gain
    pub kp: f32,
    /// Integral gain
    pub ki: f32,
    /// Derivative gain
    pub kd: f32,
}

impl PidGains {
    /// Create a gain set
    pub const fn new(kp: f32, ki: f32, kd: f32) -> Self {
        Self { kp, ki, kd }
    }
}

/// Discrete PID controller with a fixed period
#[derive(Debug, Clone)]
pub struct PidController {
    gains: PidGains,
    period_s: f32,
    integrator_min: f32,
    integrator_max: f32,
    total_error: f32,
    prev_error: Option<f32>,
}

impl PidController {
    /// Default integrator bound (output units / ki)
    pub const DEFAULT_INTEGRATOR_RANGE: f32 = 1.0;

    /// Create a controller
    ///
    /// # Arguments
    ///
    /// * `gains` - Proportional/integral/derivative gains
    /// * `period_s` - Control period in seconds (must be positive)
    pub fn new(gains: PidGains, period_s: f32) -> Self {
        Self {
            gains,
            period_s: if period_s > 0.0 { period_s } else { 0.02 },
            integrator_min: -Self::DEFAULT_INTEGRATOR_RANGE,
            integrator_max: Self::DEFAULT_INTEGRATOR_RANGE,
            total_error: 0.0,
            prev_error: None,
        }
    }

    /// Bound the accumulated integral term
    pub fn with_integrator_range(mut self, min: f32, max: f32) -> Self {
        self.integrator_min = min.min(max);
        self.integrator_max = max.max(min);
        self
    }

    /// Compute the control output for one cycle
    pub fn calculate(&mut self, measurement: f32, setpoint: f32) -> f32 {
        if !measurement.is_finite() || !setpoint.is_finite() {
            return 0.0;
        }
        let error = setpoint - measurement;

        let derivative = match self.prev_error {
            Some(prev) => (error - prev) / self.period_s,
            None => 0.0,
        };

        if self.gains.ki != 0.0 {
            let ki = fabsf(self.gains.ki);
            self.total_error = (self.total_error + error * self.period_s)
                .clamp(self.integrator_min / ki, self.integrator_max / ki);
        }

        self.prev_error = Some(error);

        self.gains.kp * error + self.gains.ki * self.total_error + self.gains.kd * derivative
    }

    /// True if the last error is within `tolerance` of zero
    pub fn at_setpoint(&self, tolerance: f32) -> bool {
        matches!(self.prev_error, Some(e) if fabsf(e) < tolerance)
    }

    /// Clear integral and derivative history
    pub fn reset(&mut self) {
        self.total_error = 0.0;
        self.prev_error = None;
    }

    /// Replace the gains without clearing state
    pub fn set_gains(&mut self, gains: PidGains) {
        self.gains = gains;
    }

    /// Current gains
    pub fn gains(&self) -> PidGains {
        self.gains
    }

    /// Control period in seconds
    pub fn period(&self) -> f32 {
        self.period_s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportional_only() {
        let mut pid = PidController::new(PidGains::new(0.5, 0.0, 0.0), 0.02);
        assert!((pid.calculate(4.0, 0.0) - (-2.0)).abs() < 1e-6);
        assert!((pid.calculate(-2.0, 0.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_error_gives_zero_output() {
        let mut pid = PidController::new(PidGains::new(0.03, 0.01, 0.002), 0.02);
        assert_eq!(pid.calculate(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_derivative_is_zero_on_first_cycle() {
        let mut pid = PidController::new(PidGains::new(0.0, 0.0, 1.0), 0.02);
        assert_eq!(pid.calculate(10.0, 0.0), 0.0);
        // error moves from -10 to -8 over one period: +2 / 0.02 = 100
        assert!((pid.calculate(8.0, 0.0) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_integral_accumulates_and_clamps() {
        let mut pid = PidController::new(PidGains::new(0.0, 1.0, 0.0), 0.1)
            .with_integrator_range(-0.5, 0.5);

        let first = pid.calculate(0.0, 1.0);
        assert!((first - 0.1).abs() < 1e-6, "got {}", first);

        for _ in 0..20 {
            pid.calculate(0.0, 1.0);
        }
        let saturated = pid.calculate(0.0, 1.0);
        assert!((saturated - 0.5).abs() < 1e-6, "got {}", saturated);
    }

    #[test]
    fn test_integral_ignored_when_ki_zero() {
        let mut pid = PidController::new(PidGains::new(1.0, 0.0, 0.0), 0.02);
        for _ in 0..50 {
            pid.calculate(0.0, 1.0);
        }
        assert!((pid.calculate(0.0, 1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut pid = PidController::new(PidGains::new(0.0, 1.0, 1.0), 0.02);
        pid.calculate(5.0, 0.0);
        pid.calculate(3.0, 0.0);
        pid.reset();
        assert!(!pid.at_setpoint(100.0));
        // No derivative kick and empty integrator after reset
        let out = pid.calculate(0.0, 0.0);
        assert_eq!(out, 0.0);
    }

    #[test]
    fn test_at_setpoint() {
        let mut pid = PidController::new(PidGains::new(0.03, 0.0, 0.0), 0.02);
        assert!(!pid.at_setpoint(0.1));
        pid.calculate(0.05, 0.0);
        assert!(pid.at_setpoint(0.1));
        pid.calculate(0.2, 0.0);
        assert!(!pid.at_setpoint(0.1));
    }

    #[test]
    fn test_non_positive_period_falls_back() {
        let pid = PidController::new(PidGains::default(), 0.0);
        assert!((pid.period() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_measurement_skips_derivative_history() {
        let mut pid = PidController::new(PidGains::new(0.0, 0.0, 1.0), 0.1);
        pid.calculate(2.0, 0.0);
        assert_eq!(pid.calculate(f32::NAN, 0.0), 0.0);
        assert_eq!(pid.calculate(f32::INFINITY, 0.0), 0.0);
        // error -2 -> -1 over one period: +1 / 0.1 = 10
        let out = pid.calculate(1.0, 0.0);
        assert!((out - 10.0).abs() < 1e-4, "got {}", out);
    }

    #[test]
    fn test_non_finite_measurement_skips_integral() {
        let mut pid = PidController::new(PidGains::new(0.0, 1.0, 0.0), 0.1);
        pid.calculate(0.0, 1.0);
        assert_eq!(pid.calculate(f32::NAN, 1.0), 0.0);
        assert_eq!(pid.calculate(0.0, f32::NAN), 0.0);
        let out = pid.calculate(0.0, 1.0);
        assert!((out - 0.2).abs() < 1e-6, "got {}", out);
    }
}
