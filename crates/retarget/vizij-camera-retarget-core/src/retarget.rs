//! Retargeter: runs one clip through remap → rotation correction → tangent linearization.
//!
//! Each pass owns its ClipSource/ClipTarget pair; nothing is shared across passes, so
//! distinct clips can be retargeted concurrently.

use log::debug;

use crate::config::RetargetConfig;
use crate::data::{ClipSource, ClipTarget};
use crate::error::RetargetError;
use crate::linearize::{linearize_curve_set, LinearizeStats};
use crate::naming::NamingContext;
use crate::remap::remap_curves;
use crate::rotation::{correct_camera_rotation, RotationMode};
use crate::settings::ImportSettings;

/// What a pass did to the target clip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RetargetSummary {
    pub curves_written: usize,
    pub rotation_keys_corrected: usize,
    /// `None` when compression is off and linearization was skipped.
    pub linearize: Option<LinearizeStats>,
}

#[derive(Clone, Debug, Default)]
pub struct Retargeter {
    config: RetargetConfig,
}

impl Retargeter {
    pub fn new(config: RetargetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetargetConfig {
        &self.config
    }

    /// Retarget `source` into a fresh clip.
    pub fn retarget(
        &self,
        source: &ClipSource,
        naming: &NamingContext,
        settings: &ImportSettings,
    ) -> Result<ClipTarget, RetargetError> {
        let mut target = ClipTarget::new(source.name());
        self.retarget_into(source, &mut target, naming, settings)?;
        Ok(target)
    }

    /// Retarget `source` into a caller-owned clip (e.g. one loaded from disk).
    ///
    /// Prior curves on `target` are cleared and its metadata is replaced by the source's,
    /// so repeated passes over the same source produce the same clip.
    pub fn retarget_into(
        &self,
        source: &ClipSource,
        target: &mut ClipTarget,
        naming: &NamingContext,
        settings: &ImportSettings,
    ) -> Result<RetargetSummary, RetargetError> {
        if source.curves().is_empty() {
            return Err(RetargetError::EmptyCurveSet {
                clip: source.name().to_string(),
            });
        }

        target.clear_curves();
        target.copy_metadata_from(source);

        let curves_written = remap_curves(source.curves(), naming, &mut target.curves);
        // pre-correction copy: the linearizer samples the curves as imported
        let reference = target.curves.clone();

        let mode = RotationMode::from_resample(settings.resample_curves);
        let rotation_keys_corrected =
            correct_camera_rotation(&mut target.curves, mode, self.config.yaw_correction_degrees);

        let linearize = settings.compression_enabled().then(|| {
            linearize_curve_set(&mut target.curves, &reference, &self.config.linearize)
        });

        let summary = RetargetSummary {
            curves_written,
            rotation_keys_corrected,
            linearize,
        };
        debug!("retargeted clip '{}': {:?}", source.name(), summary);
        Ok(summary)
    }
}
