//! Align-and-Shoot Parameter Definitions
//!
//! Maps every tunable field of `AlignShootConfig` to a parameter store
//! entry.
//!
//! # Parameters
//!
//! - `STICK_DB` - Stick dead-zone half width
//! - `STICK_SLEW` - Stick slew rate (units/s)
//! - `DRV_MAX_SPD` - Linear speed at full stick (m/s)
//! - `DRV_MAX_ANG` - Angular velocity at full stick (rad/s)
//! - `ALN_P`, `ALN_I`, `ALN_D` - Alignment PID gains
//! - `ALN_TOL` - On-target bearing tolerance (degrees)
//! - `CTRL_PERIOD` - Nominal control period (s), read-only: the period is
//!   fixed by the scheduler that runs the controller

use super::error::ParameterError;
use super::storage::{ParamFlags, ParameterStore};
use crate::command::AlignShootConfig;
use crate::control::PidGains;

// --- Defaults ---

const DEFAULT_STICK_DEADBAND: f32 = 0.1;
const DEFAULT_SLEW_RATE: f32 = 3.0;
const DEFAULT_MAX_SPEED: f32 = 4.5;
const DEFAULT_MAX_ANGULAR: f32 = 10.0;
const DEFAULT_ALIGN_P: f32 = 0.03;
const DEFAULT_ALIGN_I: f32 = 0.0;
const DEFAULT_ALIGN_D: f32 = 0.0;
const DEFAULT_TOLERANCE: f32 = 0.1;
const DEFAULT_PERIOD: f32 = 0.02;

// --- Ranges ---

const MIN_DEADBAND: f32 = 0.0;
const MAX_DEADBAND: f32 = 0.5;

const MIN_SLEW_RATE: f32 = 0.1;
const MAX_SLEW_RATE: f32 = 20.0;

const MIN_SPEED: f32 = 0.1;
const MAX_SPEED: f32 = 10.0;

const MIN_ANGULAR: f32 = 0.1;
const MAX_ANGULAR: f32 = 20.0;

const MIN_GAIN: f32 = 0.0;
const MAX_GAIN: f32 = 10.0;

const MIN_TOLERANCE: f32 = 0.01;
const MAX_TOLERANCE: f32 = 5.0;

const MIN_PERIOD: f32 = 0.001;
const MAX_PERIOD: f32 = 0.1;

/// Align-and-shoot parameters loaded from parameter store
#[derive(Debug, Clone, PartialEq)]
pub struct AlignParams {
    /// Stick dead-zone half width
    pub stick_deadband: f32,
    /// Stick slew rate (units/s)
    pub slew_rate: f32,
    /// Linear speed at full stick (m/s)
    pub max_speed_mps: f32,
    /// Angular velocity at full stick (rad/s)
    pub max_angular_radps: f32,
    /// Alignment proportional gain
    pub align_p: f32,
    /// Alignment integral gain
    pub align_i: f32,
    /// Alignment derivative gain
    pub align_d: f32,
    /// On-target bearing tolerance (degrees)
    pub on_target_tolerance_deg: f32,
    /// Nominal control period (s)
    pub period_s: f32,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            stick_deadband: DEFAULT_STICK_DEADBAND,
            slew_rate: DEFAULT_SLEW_RATE,
            max_speed_mps: DEFAULT_MAX_SPEED,
            max_angular_radps: DEFAULT_MAX_ANGULAR,
            align_p: DEFAULT_ALIGN_P,
            align_i: DEFAULT_ALIGN_I,
            align_d: DEFAULT_ALIGN_D,
            on_target_tolerance_deg: DEFAULT_TOLERANCE,
            period_s: DEFAULT_PERIOD,
        }
    }
}

impl AlignParams {
    /// Register align-and-shoot parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        let tunable = ParamFlags::empty();
        let entries = [
            ("STICK_DB", DEFAULT_STICK_DEADBAND, MIN_DEADBAND, MAX_DEADBAND, tunable),
            ("STICK_SLEW", DEFAULT_SLEW_RATE, MIN_SLEW_RATE, MAX_SLEW_RATE, tunable),
            ("DRV_MAX_SPD", DEFAULT_MAX_SPEED, MIN_SPEED, MAX_SPEED, tunable),
            ("DRV_MAX_ANG", DEFAULT_MAX_ANGULAR, MIN_ANGULAR, MAX_ANGULAR, tunable),
            ("ALN_P", DEFAULT_ALIGN_P, MIN_GAIN, MAX_GAIN, tunable),
            ("ALN_I", DEFAULT_ALIGN_I, MIN_GAIN, MAX_GAIN, tunable),
            ("ALN_D", DEFAULT_ALIGN_D, MIN_GAIN, MAX_GAIN, tunable),
            ("ALN_TOL", DEFAULT_TOLERANCE, MIN_TOLERANCE, MAX_TOLERANCE, tunable),
            ("CTRL_PERIOD", DEFAULT_PERIOD, MIN_PERIOD, MAX_PERIOD, ParamFlags::READ_ONLY),
        ];
        for (name, default, min, max, flags) in entries {
            store.register(name, default, min, max, flags)?;
        }
        Ok(())
    }

    /// Load align-and-shoot parameters from parameter store
    ///
    /// Missing entries fall back to defaults; out-of-range values are
    /// clamped.
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            stick_deadband: load_float(
                store,
                "STICK_DB",
                DEFAULT_STICK_DEADBAND,
                MIN_DEADBAND,
                MAX_DEADBAND,
            ),
            slew_rate: load_float(
                store,
                "STICK_SLEW",
                DEFAULT_SLEW_RATE,
                MIN_SLEW_RATE,
                MAX_SLEW_RATE,
            ),
            max_speed_mps: load_float(store, "DRV_MAX_SPD", DEFAULT_MAX_SPEED, MIN_SPEED, MAX_SPEED),
            max_angular_radps: load_float(
                store,
                "DRV_MAX_ANG",
                DEFAULT_MAX_ANGULAR,
                MIN_ANGULAR,
                MAX_ANGULAR,
            ),
            align_p: load_float(store, "ALN_P", DEFAULT_ALIGN_P, MIN_GAIN, MAX_GAIN),
            align_i: load_float(store, "ALN_I", DEFAULT_ALIGN_I, MIN_GAIN, MAX_GAIN),
            align_d: load_float(store, "ALN_D", DEFAULT_ALIGN_D, MIN_GAIN, MAX_GAIN),
            on_target_tolerance_deg: load_float(
                store,
                "ALN_TOL",
                DEFAULT_TOLERANCE,
                MIN_TOLERANCE,
                MAX_TOLERANCE,
            ),
            period_s: load_float(store, "CTRL_PERIOD", DEFAULT_PERIOD, MIN_PERIOD, MAX_PERIOD),
        }
    }

    /// Convert to `AlignShootConfig` for use by `AlignShootController`
    ///
    /// Camera and drive flags keep their `AlignShootConfig` defaults.
    pub fn to_config(&self) -> AlignShootConfig {
        AlignShootConfig {
            stick_deadband: self.stick_deadband,
            slew_rate: self.slew_rate,
            max_speed_mps: self.max_speed_mps,
            max_angular_radps: self.max_angular_radps,
            align_gains: PidGains::new(self.align_p, self.align_i, self.align_d),
            on_target_tolerance_deg: self.on_target_tolerance_deg,
            period_s: self.period_s,
            ..AlignShootConfig::default()
        }
    }

    /// Validate align-and-shoot parameters
    pub fn is_valid(&self) -> bool {
        let checks = [
            (self.stick_deadband, MIN_DEADBAND, MAX_DEADBAND),
            (self.slew_rate, MIN_SLEW_RATE, MAX_SLEW_RATE),
            (self.max_speed_mps, MIN_SPEED, MAX_SPEED),
            (self.max_angular_radps, MIN_ANGULAR, MAX_ANGULAR),
            (self.align_p, MIN_GAIN, MAX_GAIN),
            (self.align_i, MIN_GAIN, MAX_GAIN),
            (self.align_d, MIN_GAIN, MAX_GAIN),
            (self.on_target_tolerance_deg, MIN_TOLERANCE, MAX_TOLERANCE),
            (self.period_s, MIN_PERIOD, MAX_PERIOD),
        ];
        // NaN fails the range check as well
        checks
            .iter()
            .all(|&(value, min, max)| value >= min && value <= max)
    }
}

/// Load a float parameter from store with clamping
fn load_float(store: &ParameterStore, name: &str, default: f32, min: f32, max: f32) -> f32 {
    match store.get(name) {
        Some(v) if !v.is_nan() => v.clamp(min, max),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_params_defaults() {
        let params = AlignParams::default();
        assert!((params.stick_deadband - 0.1).abs() < 0.001);
        assert!((params.slew_rate - 3.0).abs() < 0.001);
        assert!((params.align_p - 0.03).abs() < 0.0001);
        assert!(params.is_valid());
    }

    #[test]
    fn test_register_defaults_populates_all() {
        let mut store = ParameterStore::new();
        AlignParams::register_defaults(&mut store).unwrap();
        assert_eq!(store.len(), 9);
        for name in [
            "STICK_DB",
            "STICK_SLEW",
            "DRV_MAX_SPD",
            "DRV_MAX_ANG",
            "ALN_P",
            "ALN_I",
            "ALN_D",
            "ALN_TOL",
            "CTRL_PERIOD",
        ] {
            assert!(store.get(name).is_some(), "{} missing", name);
        }
    }

    #[test]
    fn test_from_store_reads_defaults() {
        let mut store = ParameterStore::new();
        AlignParams::register_defaults(&mut store).unwrap();
        assert_eq!(AlignParams::from_store(&store), AlignParams::default());
    }

    #[test]
    fn test_from_empty_store_uses_defaults() {
        let store = ParameterStore::new();
        assert_eq!(AlignParams::from_store(&store), AlignParams::default());
    }

    #[test]
    fn test_from_store_reads_custom_values() {
        let mut store = ParameterStore::new();
        AlignParams::register_defaults(&mut store).unwrap();
        store.set("STICK_SLEW", 6.0).unwrap();
        store.set("ALN_P", 0.05).unwrap();
        store.set("DRV_MAX_SPD", 3.0).unwrap();

        let params = AlignParams::from_store(&store);
        assert!((params.slew_rate - 6.0).abs() < 0.001);
        assert!((params.align_p - 0.05).abs() < 0.0001);
        assert!((params.max_speed_mps - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_out_of_range_set_rejected() {
        let mut store = ParameterStore::new();
        AlignParams::register_defaults(&mut store).unwrap();
        assert_eq!(store.set("STICK_DB", 0.9), Err(ParameterError::OutOfRange));
        assert_eq!(store.set("ALN_TOL", 0.0), Err(ParameterError::OutOfRange));
    }

    #[test]
    fn test_period_is_read_only() {
        let mut store = ParameterStore::new();
        AlignParams::register_defaults(&mut store).unwrap();
        assert!(store.get_metadata("CTRL_PERIOD").unwrap().is_read_only());
        assert!(!store.get_metadata("ALN_P").unwrap().is_read_only());
        assert_eq!(store.set("CTRL_PERIOD", 0.01), Err(ParameterError::ReadOnly));
        assert_eq!(AlignParams::from_store(&store).period_s, DEFAULT_PERIOD);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        // Registered elsewhere with looser bounds: clamped on load
        let mut store = ParameterStore::new();
        store
            .register("STICK_DB", 0.9, 0.0, 1.0, ParamFlags::empty())
            .unwrap();
        store
            .register("STICK_SLEW", -4.0, -10.0, 10.0, ParamFlags::empty())
            .unwrap();
        store
            .register("ALN_P", f32::NAN, 0.0, 1.0, ParamFlags::empty())
            .unwrap();

        let params = AlignParams::from_store(&store);
        assert!((params.stick_deadband - MAX_DEADBAND).abs() < 0.001);
        assert!((params.slew_rate - MIN_SLEW_RATE).abs() < 0.001);
        assert!((params.align_p - DEFAULT_ALIGN_P).abs() < 0.0001);
        assert!(params.is_valid());
    }

    #[test]
    fn test_to_config_produces_matching_config() {
        let params = AlignParams {
            stick_deadband: 0.05,
            slew_rate: 5.0,
            max_speed_mps: 3.5,
            max_angular_radps: 8.0,
            align_p: 0.04,
            align_i: 0.001,
            align_d: 0.002,
            on_target_tolerance_deg: 0.5,
            period_s: 0.01,
        };
        let config = params.to_config();
        assert!((config.stick_deadband - 0.05).abs() < 0.0001);
        assert!((config.slew_rate - 5.0).abs() < 0.001);
        assert!((config.max_speed_mps - 3.5).abs() < 0.001);
        assert!((config.max_angular_radps - 8.0).abs() < 0.001);
        assert_eq!(config.align_gains, PidGains::new(0.04, 0.001, 0.002));
        assert!((config.on_target_tolerance_deg - 0.5).abs() < 0.001);
        assert!((config.period_s - 0.01).abs() < 0.0001);
        assert_eq!(config.camera, AlignShootConfig::default().camera);
    }

    #[test]
    fn test_default_params_match_default_config() {
        assert_eq!(AlignParams::default().to_config(), AlignShootConfig::default());
    }

    #[test]
    fn test_is_valid_rejects_invalid_params() {
        let params = AlignParams {
            slew_rate: 0.0,
            ..AlignParams::default()
        };
        assert!(!params.is_valid());

        let params = AlignParams {
            align_p: f32::NAN,
            ..AlignParams::default()
        };
        assert!(!params.is_valid());

        let params = AlignParams {
            period_s: 0.5,
            ..AlignParams::default()
        };
        assert!(!params.is_valid());
    }
}
