//! Core configuration for vizij-camera-retarget-core.

use serde::{Deserialize, Serialize};

/// Naming conventions and numeric knobs of a retarget pass.
/// Defaults reproduce the DCC camera export conventions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetargetConfig {
    /// File stem prefix marking a model as a camera export.
    pub camera_prefix: String,
    /// File stem suffix selecting the virtual camera rig as target.
    pub virtual_camera_suffix: String,
    /// Clips whose name contains this marker are importer previews and are skipped.
    pub preview_marker: String,
    /// Extension of exported clip assets (without the dot).
    pub export_extension: String,
    /// Heading correction applied to every rotation key, in degrees.
    pub yaw_correction_degrees: f64,

    pub linearize: LinearizeConfig,
}

/// Tangent linearization heuristic parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearizeConfig {
    /// Path/chord length ratio above which a segment is flattened.
    pub ratio_threshold: f64,
    /// Number of sub-segments sampled per key pair (samples = segments + 1).
    pub segments: usize,
}

impl Default for LinearizeConfig {
    fn default() -> Self {
        Self {
            ratio_threshold: 2.0,
            segments: 10,
        }
    }
}

impl Default for RetargetConfig {
    fn default() -> Self {
        Self {
            camera_prefix: "mCam_".into(),
            virtual_camera_suffix: "_VC".into(),
            preview_marker: "__preview__".into(),
            export_extension: "anim".into(),
            yaw_correction_degrees: 180.0,
            linearize: LinearizeConfig::default(),
        }
    }
}
