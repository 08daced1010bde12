//! Host model-import settings consumed and adjusted by the camera importer.

use serde::{Deserialize, Serialize};

use crate::naming::NamingContext;

/// Keyframe compression applied by the host when importing animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationCompression {
    Off,
    #[default]
    KeyframeReduction,
    KeyframeReductionAndCompression,
    Optimal,
}

/// Rig type the host imports the model's animation as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModelAnimationType {
    None,
    Legacy,
    #[default]
    Generic,
    Human,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportSettings {
    pub import_animation: bool,
    pub animation_type: ModelAnimationType,
    /// Rotation is resampled into quaternion curves (otherwise raw euler curves).
    pub resample_curves: bool,
    pub compression: AnimationCompression,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            import_animation: true,
            animation_type: ModelAnimationType::Generic,
            resample_curves: true,
            compression: AnimationCompression::KeyframeReduction,
        }
    }
}

impl ImportSettings {
    pub fn compression_enabled(&self) -> bool {
        self.compression != AnimationCompression::Off
    }
}

/// Adjust import settings before the host imports a camera model.
///
/// Animation import is forced on; virtual camera exports are imported as generic rigs,
/// which the virtual camera bindings require. Returns whether anything changed.
pub fn preprocess_import(naming: &NamingContext, settings: &mut ImportSettings) -> bool {
    if !naming.is_camera_source {
        return false;
    }
    let before = settings.clone();
    settings.import_animation = true;
    if naming.is_virtual_camera {
        settings.animation_type = ModelAnimationType::Generic;
    }
    *settings != before
}
