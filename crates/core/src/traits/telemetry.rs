//! Dashboard telemetry abstraction

use heapless::Vec;

use super::MOCK_HISTORY;

/// Best-effort numeric telemetry sink.
///
/// Publishing never blocks and never fails from the caller's view.
pub trait Telemetry {
    /// Publish a named value
    fn publish(&mut self, channel: &'static str, value: f32);
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock telemetry sink recording every publish.
#[derive(Debug, Default)]
pub struct MockTelemetry {
    entries: Vec<(&'static str, f32), MOCK_HISTORY>,
    count: usize,
}

impl MockTelemetry {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded entries, oldest first.
    pub fn entries(&self) -> &[(&'static str, f32)] {
        &self.entries
    }

    /// Most recent value published on `channel`.
    pub fn latest(&self, channel: &str) -> Option<f32> {
        self.entries
            .iter()
            .rev()
            .find(|(name, _)| *name == channel)
            .map(|(_, value)| *value)
    }

    /// Total publishes.
    pub fn publish_count(&self) -> usize {
        self.count
    }
}

impl Telemetry for MockTelemetry {
    fn publish(&mut self, channel: &'static str, value: f32) {
        self.count += 1;
        let _ = self.entries.push((channel, value));
    }
}
