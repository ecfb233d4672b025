//! Slew-rate limiter
//!
//! Limits how fast a signal may change between control cycles. Used on each
//! stick axis so that a full deflection ramps in instead of stepping.

use libm::fabsf;

/// Rate-of-change limiter with separate rising and falling limits.
///
/// Each call to [`calculate`](Self::calculate) moves the output toward the
/// requested input by at most `rising * dt` (increasing) or `falling * dt`
/// (decreasing). Limits are magnitudes in units per second.
///
/// # Example
///
/// ```
/// use align_shoot_core::filter::SlewRateLimiter;
///
/// // 3.0 units/s: 1/3 s to go from 0.0 to 1.0
/// let mut limiter = SlewRateLimiter::new(3.0);
/// let out = limiter.calculate(1.0, 0.02);
/// assert!((out - 0.06).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SlewRateLimiter {
    rising: f32,
    falling: f32,
    prev: f32,
}

impl SlewRateLimiter {
    /// Create a symmetric limiter starting at 0.0
    pub fn new(rate: f32) -> Self {
        Self::with_limits(rate, rate)
    }

    /// Create a limiter with distinct rising and falling limits
    ///
    /// Negative limits are taken by magnitude.
    pub fn with_limits(rising: f32, falling: f32) -> Self {
        Self {
            rising: fabsf(rising),
            falling: fabsf(falling),
            prev: 0.0,
        }
    }

    /// Advance one cycle toward `input`
    ///
    /// # Arguments
    ///
    /// * `input` - Requested value
    /// * `dt` - Time since the previous call (seconds)
    ///
    /// # Returns
    ///
    /// The rate-limited output. A non-finite input or a non-positive `dt`
    /// holds the previous output.
    pub fn calculate(&mut self, input: f32, dt: f32) -> f32 {
        if !input.is_finite() || !dt.is_finite() || dt <= 0.0 {
            return self.prev;
        }

        let step = (input - self.prev).clamp(-self.falling * dt, self.rising * dt);
        self.prev += step;
        self.prev
    }

    /// Force the output to `value` (no ramp)
    pub fn reset(&mut self, value: f32) {
        self.prev = value;
    }

    /// Output of the most recent cycle
    pub fn last_value(&self) -> f32 {
        self.prev
    }

    /// Maximum rising rate (units/s)
    pub fn rising_limit(&self) -> f32 {
        self.rising
    }

    /// Maximum falling rate (units/s)
    pub fn falling_limit(&self) -> f32 {
        self.falling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.02;

    #[test]
    fn test_step_is_bounded_by_rate_times_dt() {
        let mut limiter = SlewRateLimiter::new(3.0);
        let out = limiter.calculate(1.0, DT);
        assert!((out - 0.06).abs() < 1e-6, "got {}", out);
    }

    #[test]
    fn test_reaches_target_after_full_ramp() {
        let mut limiter = SlewRateLimiter::new(3.0);
        // 1/3 s at 50 Hz is ~17 cycles; allow a few extra
        let mut out = 0.0;
        for _ in 0..20 {
            out = limiter.calculate(1.0, DT);
        }
        assert!((out - 1.0).abs() < 1e-6, "got {}", out);
    }

    #[test]
    fn test_small_change_passes_through() {
        let mut limiter = SlewRateLimiter::new(3.0);
        let out = limiter.calculate(0.01, DT);
        assert!((out - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_arbitrary_sequence_never_exceeds_bound() {
        let mut limiter = SlewRateLimiter::new(3.0);
        let inputs = [1.0, -1.0, 0.5, 0.5, -0.2, 1.0, 1.0, -1.0, 0.0, 0.9, -0.9, 0.3];
        let mut prev = limiter.last_value();
        for _ in 0..5 {
            for &input in &inputs {
                let out = limiter.calculate(input, DT);
                assert!(
                    (out - prev).abs() <= 3.0 * DT + 1e-6,
                    "jump {} -> {} exceeds bound",
                    prev,
                    out
                );
                prev = out;
            }
        }
    }

    #[test]
    fn test_asymmetric_limits() {
        let mut limiter = SlewRateLimiter::with_limits(1.0, 5.0);
        limiter.reset(0.5);

        let up = limiter.calculate(1.0, 0.1);
        assert!((up - 0.6).abs() < 1e-6, "got {}", up);

        let down = limiter.calculate(-1.0, 0.1);
        assert!((down - 0.1).abs() < 1e-6, "got {}", down);
    }

    #[test]
    fn test_negative_limits_taken_by_magnitude() {
        let limiter = SlewRateLimiter::with_limits(2.0, -4.0);
        assert!((limiter.rising_limit() - 2.0).abs() < 1e-6);
        assert!((limiter.falling_limit() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_dt_holds_output() {
        let mut limiter = SlewRateLimiter::new(3.0);
        limiter.reset(0.4);
        assert_eq!(limiter.calculate(1.0, 0.0), 0.4);
        assert_eq!(limiter.calculate(1.0, -0.02), 0.4);
        assert_eq!(limiter.calculate(1.0, f32::NAN), 0.4);
    }

    #[test]
    fn test_nan_input_holds_output() {
        let mut limiter = SlewRateLimiter::new(3.0);
        limiter.reset(0.2);
        assert_eq!(limiter.calculate(f32::NAN, DT), 0.2);
        assert_eq!(limiter.calculate(f32::INFINITY, DT), 0.2);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut limiter = SlewRateLimiter::new(3.0);
        for _ in 0..10 {
            limiter.calculate(1.0, DT);
        }
        limiter.reset(0.0);
        assert_eq!(limiter.last_value(), 0.0);
        let out = limiter.calculate(1.0, DT);
        assert!((out - 0.06).abs() < 1e-6);
    }
}
