//! Import driver and the collaborator traits adapters implement.
//!
//! One `import()` call corresponds to the host finishing a model import: every non-preview
//! clip of a camera export is retargeted and persisted next to the model, replacing an
//! existing asset of the same name or creating a new one.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::RetargetConfig;
use crate::data::{ClipSource, ClipTarget};
use crate::error::{ImportError, RetargetError};
use crate::naming::NamingContext;
use crate::retarget::Retargeter;
use crate::settings::{preprocess_import, ImportSettings};

/// Asset discovery: the clips and import configuration of an imported model.
pub trait AssetSource {
    fn load_clips(&mut self, import_path: &Path) -> Result<Vec<ClipSource>, ImportError>;
    fn import_settings(&mut self, import_path: &Path) -> Result<ImportSettings, ImportError>;
}

/// Persistence of exported clips.
pub trait ClipStore {
    fn exists(&self, path: &Path) -> bool;
    fn load(&mut self, path: &Path) -> Result<Option<ClipTarget>, ImportError>;
    fn save(&mut self, path: &Path, clip: &ClipTarget) -> Result<(), ImportError>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ClipOutcome {
    Created,
    Replaced,
    Skipped { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipReport {
    pub clip_name: String,
    pub export_path: PathBuf,
    pub outcome: ClipOutcome,
}

/// Per-import summary returned to the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub clips: Vec<ClipReport>,
    /// A clip had no curves; the host should reimport the model without post-processing.
    pub reimport_requested: bool,
}

impl ImportReport {
    pub fn written(&self) -> impl Iterator<Item = &ClipReport> {
        self.clips
            .iter()
            .filter(|c| !matches!(c.outcome, ClipOutcome::Skipped { .. }))
    }
}

pub struct CameraImporter<S, P> {
    source: S,
    store: P,
    retargeter: Retargeter,
}

impl<S: AssetSource, P: ClipStore> CameraImporter<S, P> {
    pub fn new(source: S, store: P, config: RetargetConfig) -> Self {
        Self {
            source,
            store,
            retargeter: Retargeter::new(config),
        }
    }

    pub fn config(&self) -> &RetargetConfig {
        self.retargeter.config()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn into_parts(self) -> (S, P) {
        (self.source, self.store)
    }

    /// Pre-import hook: adjust the host's settings for camera exports.
    pub fn preprocess(&self, import_path: &Path, settings: &mut ImportSettings) -> bool {
        let naming = NamingContext::from_path(import_path, self.config());
        preprocess_import(&naming, settings)
    }

    /// Post-import hook: retarget and persist every clip of the model at `import_path`.
    ///
    /// Clips are written in source order. A store or source failure aborts the import and
    /// is returned as the error; clips saved before the failure stay persisted and are not
    /// rolled back. Rerunning the import rewrites them.
    pub fn import(&mut self, import_path: &Path) -> Result<ImportReport, ImportError> {
        let naming = NamingContext::from_path(import_path, self.config());
        if !naming.is_camera_source {
            debug!("skip {}: not a camera export", import_path.display());
            return Ok(ImportReport::default());
        }

        let settings = self.source.import_settings(import_path)?;
        let marker = self.config().preview_marker.clone();
        let clips: Vec<ClipSource> = self
            .source
            .load_clips(import_path)?
            .into_iter()
            .filter(|c| !c.name().contains(&marker))
            .collect();

        let mut report = ImportReport::default();
        if clips.is_empty() {
            warn!("no animation clips found in {}", import_path.display());
            return Ok(report);
        }

        for clip in &clips {
            let export_path = naming.export_path(import_path, clip.name(), self.config());
            let outcome = self.import_clip(clip, &naming, &settings, &export_path)?;
            if matches!(outcome, ClipOutcome::Skipped { .. }) {
                report.reimport_requested = true;
            }
            report.clips.push(ClipReport {
                clip_name: clip.name().to_string(),
                export_path,
                outcome,
            });
        }
        Ok(report)
    }

    fn import_clip(
        &mut self,
        clip: &ClipSource,
        naming: &NamingContext,
        settings: &ImportSettings,
        export_path: &Path,
    ) -> Result<ClipOutcome, ImportError> {
        let existing = if self.store.exists(export_path) {
            self.store.load(export_path)?
        } else {
            None
        };
        let replaced = existing.is_some();
        let mut target = existing.unwrap_or_else(|| ClipTarget::new(clip.name()));

        // an empty source leaves `target` untouched, so nothing is saved
        match self
            .retargeter
            .retarget_into(clip, &mut target, naming, settings)
        {
            Ok(_) => {}
            Err(err @ RetargetError::EmptyCurveSet { .. }) => {
                warn!("{err}; requesting reimport of '{}'", naming.exported_clip_name);
                return Ok(ClipOutcome::Skipped {
                    reason: err.to_string(),
                });
            }
        }
        self.store.save(export_path, &target)?;

        if replaced {
            info!(
                "camera [{}] replaced animation data: {}",
                naming.exported_clip_name,
                export_path.display()
            );
            Ok(ClipOutcome::Replaced)
        } else {
            info!(
                "camera [{}] created animation data: {}",
                naming.exported_clip_name,
                export_path.display()
            );
            Ok(ClipOutcome::Created)
        }
    }
}
