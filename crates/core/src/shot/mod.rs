//! Shot parameter lookup
//!
//! Range to target maps to an arm elevation and a flywheel speed through two
//! independent interpolation tables. The tables are configuration data; the
//! controller only reads them.

use crate::interpolation::{InterpolatingMap, TableError};

/// Maximum points per shot table
pub const SHOT_TABLE_CAPACITY: usize = 16;

/// Built-in arm angle table: (range m, arm angle deg)
const DEFAULT_ARM_ANGLE_POINTS: [(f32, f32); 8] = [
    (1.0, 55.0),
    (1.5, 48.0),
    (2.0, 42.0),
    (2.5, 37.5),
    (3.0, 34.0),
    (3.5, 31.5),
    (4.0, 29.5),
    (5.0, 27.0),
];

/// Built-in shooter table: (range m, flywheel RPM)
const DEFAULT_SHOOTER_RPM_POINTS: [(f32, f32); 8] = [
    (1.0, 3000.0),
    (1.5, 3200.0),
    (2.0, 3400.0),
    (2.5, 3650.0),
    (3.0, 3900.0),
    (3.5, 4150.0),
    (4.0, 4400.0),
    (5.0, 4800.0),
];

/// Interpolation table sized for shot lookups
pub type ShotTable = InterpolatingMap<SHOT_TABLE_CAPACITY>;

/// Arm and shooter setpoints for one range
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShotParameters {
    /// Arm elevation in degrees
    pub arm_angle_deg: f32,
    /// Flywheel speed in RPM
    pub shooter_rpm: f32,
}

/// Range-keyed arm angle and shooter RPM tables
#[derive(Debug, Clone)]
pub struct ShotTables {
    arm_angle: ShotTable,
    shooter_rpm: ShotTable,
}

impl ShotTables {
    /// Build from two tables
    ///
    /// Both tables must be non-empty and monotonic.
    pub fn new(arm_angle: ShotTable, shooter_rpm: ShotTable) -> Result<Self, TableError> {
        for table in [&arm_angle, &shooter_rpm] {
            if table.is_empty() {
                return Err(TableError::Empty);
            }
            if !table.is_monotonic() {
                return Err(TableError::NotMonotonic);
            }
        }
        Ok(Self {
            arm_angle,
            shooter_rpm,
        })
    }

    /// Build from raw `(range, value)` points
    pub fn from_points(
        arm_angle: &[(f32, f32)],
        shooter_rpm: &[(f32, f32)],
    ) -> Result<Self, TableError> {
        Self::new(
            ShotTable::from_points(arm_angle)?,
            ShotTable::from_points(shooter_rpm)?,
        )
    }

    /// Setpoints for `range_m`
    ///
    /// Ranges outside a table's domain clamp to its end points. A NaN range
    /// yields the shortest-range entry.
    pub fn lookup(&self, range_m: f32) -> ShotParameters {
        let range_m = if range_m.is_nan() { 0.0 } else { range_m };
        ShotParameters {
            arm_angle_deg: self.arm_angle.get(range_m).unwrap_or_default(),
            shooter_rpm: self.shooter_rpm.get(range_m).unwrap_or_default(),
        }
    }

    /// Arm angle table
    pub fn arm_angle(&self) -> &ShotTable {
        &self.arm_angle
    }

    /// Shooter RPM table
    pub fn shooter_rpm(&self) -> &ShotTable {
        &self.shooter_rpm
    }
}

impl Default for ShotTables {
    fn default() -> Self {
        let mut arm_angle = ShotTable::new();
        let mut shooter_rpm = ShotTable::new();
        // Built-in points are sorted, finite, and well under capacity
        for (range, angle) in DEFAULT_ARM_ANGLE_POINTS {
            let _ = arm_angle.insert(range, angle);
        }
        for (range, rpm) in DEFAULT_SHOOTER_RPM_POINTS {
            let _ = shooter_rpm.insert(range, rpm);
        }
        Self {
            arm_angle,
            shooter_rpm,
        }
    }
}
