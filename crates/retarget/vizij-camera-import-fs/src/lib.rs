//! Filesystem adapters for the camera importer.
//!
//! Clips exported alongside a model live in a JSON sidecar (`<model>.clips.json`), the host
//! import configuration in `<model>.import.json`. Retargeted clips are written as pretty JSON
//! `.anim` files next to the model.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use vizij_camera_retarget_core::{
    AssetSource, CameraImporter, ClipSource, ClipStore, ClipTarget, ImportError, ImportReport,
    ImportSettings, RetargetConfig,
};

pub const CLIPS_EXTENSION: &str = "clips.json";
pub const SETTINGS_EXTENSION: &str = "import.json";

pub fn clips_path(model: &Path) -> PathBuf {
    model.with_extension(CLIPS_EXTENSION)
}

pub fn settings_path(model: &Path) -> PathBuf {
    model.with_extension(SETTINGS_EXTENSION)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
    }
    let text = serde_json::to_string_pretty(value)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

/// Reads exported clips and import settings from JSON sidecars next to the model.
#[derive(Clone, Debug, Default)]
pub struct JsonAssetSource;

impl JsonAssetSource {
    pub fn new() -> Self {
        Self
    }

    /// Persist adjusted import settings (after a preprocess pass).
    pub fn store_import_settings(
        &self,
        import_path: &Path,
        settings: &ImportSettings,
    ) -> Result<(), ImportError> {
        let path = settings_path(import_path);
        write_json(&path, settings).map_err(|e| ImportError::asset(&path, format!("{e:#}")))
    }
}

impl AssetSource for JsonAssetSource {
    fn load_clips(&mut self, import_path: &Path) -> Result<Vec<ClipSource>, ImportError> {
        let path = clips_path(import_path);
        read_json(&path).map_err(|e| ImportError::asset(&path, format!("{e:#}")))
    }

    fn import_settings(&mut self, import_path: &Path) -> Result<ImportSettings, ImportError> {
        let path = settings_path(import_path);
        if !path.is_file() {
            debug!("no import settings at {}, using defaults", path.display());
            return Ok(ImportSettings::default());
        }
        read_json(&path).map_err(|e| ImportError::asset(&path, format!("{e:#}")))
    }
}

/// Stores retargeted clips as pretty-printed JSON files.
#[derive(Clone, Debug, Default)]
pub struct FsClipStore;

impl FsClipStore {
    pub fn new() -> Self {
        Self
    }
}

impl ClipStore for FsClipStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn load(&mut self, path: &Path) -> Result<Option<ClipTarget>, ImportError> {
        if !path.is_file() {
            return Ok(None);
        }
        read_json(path)
            .map(Some)
            .map_err(|e| ImportError::store(path, format!("{e:#}")))
    }

    fn save(&mut self, path: &Path, clip: &ClipTarget) -> Result<(), ImportError> {
        write_json(path, clip).map_err(|e| ImportError::store(path, format!("{e:#}")))
    }
}

pub type FsCameraImporter = CameraImporter<JsonAssetSource, FsClipStore>;

pub fn fs_importer(config: RetargetConfig) -> FsCameraImporter {
    CameraImporter::new(JsonAssetSource::new(), FsClipStore::new(), config)
}

/// Run both import hooks for a model on disk: adjust and save its import settings, then
/// retarget and write its clips.
pub fn import_model(model: &Path, config: RetargetConfig) -> Result<ImportReport, ImportError> {
    let mut importer = fs_importer(config);
    let mut settings = importer.source_mut().import_settings(model)?;
    if importer.preprocess(model, &mut settings) {
        importer.source().store_import_settings(model, &settings)?;
    }
    importer.import(model)
}
