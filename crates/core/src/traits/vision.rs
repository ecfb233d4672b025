//! Vision camera abstraction

use core::cell::Cell;

use heapless::Vec;

use super::MOCK_HISTORY;
use crate::vision::{CameraId, Pipeline};

/// Fiducial camera queried by the controller.
///
/// Readings are per-cycle values; nothing is cached across cycles.
/// Bearing and range are only meaningful while [`target_visible`]
/// reports true.
///
/// [`target_visible`]: VisionSource::target_visible
pub trait VisionSource {
    /// True if the alignment target is detected this cycle
    fn target_visible(&self) -> bool;

    /// Horizontal offset to the target in degrees (positive = right)
    fn bearing_error_deg(&self, camera: CameraId) -> f32;

    /// Estimated horizontal range to the target in meters
    fn range_m(&self, camera: CameraId) -> f32;

    /// Switch the detection pipeline (fire and forget)
    fn select_pipeline(&mut self, pipeline: Pipeline);
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock camera with a settable target and a pipeline log.
///
/// Counts bearing and range reads so tests can check they only happen on
/// cycles where the target is visible.
#[derive(Debug, Default)]
pub struct MockVision {
    visible: bool,
    bearing_deg: f32,
    range_m: f32,
    reads: Cell<usize>,
    pipelines: Vec<Pipeline, MOCK_HISTORY>,
}

impl MockVision {
    /// Creates a camera that sees nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the target visible at the given bearing and range.
    pub fn set_target(&mut self, bearing_deg: f32, range_m: f32) {
        self.visible = true;
        self.bearing_deg = bearing_deg;
        self.range_m = range_m;
    }

    /// Hides the target.
    pub fn clear_target(&mut self) {
        self.visible = false;
    }

    /// Number of bearing and range reads so far.
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    /// Pipelines selected, oldest first.
    pub fn pipelines(&self) -> &[Pipeline] {
        &self.pipelines
    }

    /// Most recently selected pipeline.
    pub fn active_pipeline(&self) -> Option<Pipeline> {
        self.pipelines.last().copied()
    }
}

impl VisionSource for MockVision {
    fn target_visible(&self) -> bool {
        self.visible
    }

    fn bearing_error_deg(&self, _camera: CameraId) -> f32 {
        self.reads.set(self.reads.get() + 1);
        self.bearing_deg
    }

    fn range_m(&self, _camera: CameraId) -> f32 {
        self.reads.set(self.reads.get() + 1);
        self.range_m
    }

    fn select_pipeline(&mut self, pipeline: Pipeline) {
        let _ = self.pipelines.push(pipeline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_vision_starts_without_target() {
        let vision = MockVision::new();
        assert!(!vision.target_visible());
        assert_eq!(vision.active_pipeline(), None);
    }

    #[test]
    fn mock_vision_set_and_clear_target() {
        let mut vision = MockVision::new();
        vision.set_target(2.5, 3.0);
        assert!(vision.target_visible());
        assert_eq!(vision.bearing_error_deg(CameraId::FRONT_LEFT), 2.5);
        assert_eq!(vision.range_m(CameraId::FRONT_LEFT), 3.0);
        assert_eq!(vision.read_count(), 2);

        vision.clear_target();
        assert!(!vision.target_visible());
    }

    #[test]
    fn mock_vision_records_pipelines() {
        let mut vision = MockVision::new();
        vision.select_pipeline(Pipeline::AlignToTarget);
        vision.select_pipeline(Pipeline::AllTags);
        assert_eq!(
            vision.pipelines(),
            &[Pipeline::AlignToTarget, Pipeline::AllTags]
        );
        assert_eq!(vision.active_pipeline(), Some(Pipeline::AllTags));
    }
}
