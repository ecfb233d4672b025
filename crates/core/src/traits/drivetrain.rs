//! Drivetrain abstraction

use heapless::Vec;

use super::MOCK_HISTORY;
use crate::command::{DriveCommand, DriveFlags};

/// Holonomic drivetrain commanded once per cycle.
pub trait Drivetrain {
    /// Apply velocities for one cycle
    fn drive(&mut self, command: DriveCommand, flags: DriveFlags);

    /// Publish whether the robot is aligned with the target
    fn set_on_target(&mut self, on_target: bool);
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock drivetrain recording drive and on-target calls.
#[derive(Debug, Default)]
pub struct MockDrivetrain {
    drives: Vec<(DriveCommand, DriveFlags), MOCK_HISTORY>,
    on_target: Vec<bool, MOCK_HISTORY>,
    drive_count: usize,
    on_target_count: usize,
}

impl MockDrivetrain {
    /// Creates an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded drive calls, oldest first.
    pub fn drives(&self) -> &[(DriveCommand, DriveFlags)] {
        &self.drives
    }

    /// Most recent drive call.
    pub fn last_drive(&self) -> Option<(DriveCommand, DriveFlags)> {
        self.drives.last().copied()
    }

    /// Total drive calls, including ones past the history limit.
    pub fn drive_count(&self) -> usize {
        self.drive_count
    }

    /// Recorded on-target reports, oldest first.
    pub fn on_target_calls(&self) -> &[bool] {
        &self.on_target
    }

    /// Most recent on-target report.
    pub fn last_on_target(&self) -> Option<bool> {
        self.on_target.last().copied()
    }

    /// Total on-target reports.
    pub fn on_target_count(&self) -> usize {
        self.on_target_count
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.drives.clear();
        self.on_target.clear();
        self.drive_count = 0;
        self.on_target_count = 0;
    }
}

impl Drivetrain for MockDrivetrain {
    fn drive(&mut self, command: DriveCommand, flags: DriveFlags) {
        self.drive_count += 1;
        let _ = self.drives.push((command, flags));
    }

    fn set_on_target(&mut self, on_target: bool) {
        self.on_target_count += 1;
        let _ = self.on_target.push(on_target);
    }
}
