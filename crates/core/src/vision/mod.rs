//! Vision types
//!
//! Per-cycle target observations, camera identity and mounting geometry,
//! and the detection pipelines the controller switches between.

use libm::tanf;

/// Detection pipeline selected on the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// Detect every fiducial tag (default between activations)
    AllTags,
    /// Track only the alignment target
    AlignToTarget,
}

impl Pipeline {
    /// Pipeline slot index on the camera
    pub const fn index(self) -> u8 {
        match self {
            Pipeline::AllTags => 0,
            Pipeline::AlignToTarget => 1,
        }
    }
}

/// Camera identifier (network name of the camera)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraId(pub &'static str);

impl CameraId {
    /// Front-left camera, used for alignment
    pub const FRONT_LEFT: CameraId = CameraId("limelight-frleft");

    /// Camera name
    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// Observation of the alignment target for one cycle
///
/// Bearing and range are meaningful only when `visible` is true.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisionSample {
    /// Target detected this cycle
    pub visible: bool,
    /// Horizontal offset to target in degrees (0 = centred, positive = right)
    pub bearing_error_deg: f32,
    /// Estimated range to target in meters
    pub range_m: f32,
}

impl VisionSample {
    /// Target seen at the given bearing and range
    pub fn visible(bearing_error_deg: f32, range_m: f32) -> Self {
        Self {
            visible: true,
            bearing_error_deg,
            range_m,
        }
    }

    /// No target this cycle
    pub fn none() -> Self {
        Self::default()
    }
}

/// Camera mounting geometry used for range estimation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMount {
    /// Lens height above the floor (m)
    pub lens_height_m: f32,
    /// Upward tilt of the optical axis (degrees)
    pub pitch_deg: f32,
    /// Height of the target centre above the floor (m)
    pub target_height_m: f32,
}

impl Default for CameraMount {
    fn default() -> Self {
        Self {
            lens_height_m: 0.25,
            pitch_deg: 30.0,
            target_height_m: 1.45,
        }
    }
}

impl CameraMount {
    /// Horizontal range from the target's vertical offset in the image
    ///
    /// # Arguments
    ///
    /// * `vertical_offset_deg` - Target offset above the optical axis (degrees)
    ///
    /// # Returns
    ///
    /// Range in meters, or `None` if the line of sight does not reach the
    /// target height in front of the camera.
    pub fn range_from_vertical_offset(&self, vertical_offset_deg: f32) -> Option<f32> {
        let elevation = (self.pitch_deg + vertical_offset_deg).to_radians();
        let rise = self.target_height_m - self.lens_height_m;
        let range = rise / tanf(elevation);
        if range.is_finite() && range > 0.0 {
            Some(range)
        } else {
            None
        }
    }
}
