//! Joystick deadband

use libm::fabsf;

/// Clamp small stick deflections to exactly zero.
///
/// Values with `|value| < threshold` become `0.0`; everything else passes
/// through unchanged. The remaining range is not rescaled, so a stick at
/// `threshold` reports `threshold`, not `0.0`.
///
/// # Arguments
///
/// * `value` - Raw axis value (nominally -1.0 to +1.0)
/// * `threshold` - Dead-zone half width (non-negative)
pub fn apply_deadband(value: f32, threshold: f32) -> f32 {
    if fabsf(value) < threshold {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_deadband_is_zero() {
        for raw in [0.0, 0.05, -0.05, 0.0999, -0.0999] {
            assert_eq!(apply_deadband(raw, 0.1), 0.0, "raw = {}", raw);
        }
    }

    #[test]
    fn test_outside_deadband_passes_through_unscaled() {
        for raw in [0.1, -0.1, 0.35, -0.72, 1.0, -1.0] {
            assert_eq!(apply_deadband(raw, 0.1), raw, "raw = {}", raw);
        }
    }

    #[test]
    fn test_boundary_is_not_clamped() {
        // |x| < threshold is strict
        assert_eq!(apply_deadband(0.1, 0.1), 0.1);
        assert_eq!(apply_deadband(-0.1, 0.1), -0.1);
    }

    #[test]
    fn test_zero_threshold_is_identity() {
        assert_eq!(apply_deadband(0.0001, 0.0), 0.0001);
        assert_eq!(apply_deadband(-0.5, 0.0), -0.5);
    }
}
