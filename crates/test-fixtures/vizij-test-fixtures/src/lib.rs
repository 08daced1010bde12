use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    models: HashMap<String, ModelEntry>,
}

/// An exported camera model: its file name, the clips it carries and optional host
/// import settings.
#[derive(Debug, Deserialize)]
struct ModelEntry {
    model: String,
    clips: String,
    #[serde(default)]
    settings: Option<String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod models {
    use super::*;

    /// File name of the exported model (e.g. "mCam_Shot01_VC.fbx").
    pub fn model_file_name(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.models, "model", name)?;
        Ok(entry.model.clone())
    }

    pub fn clips<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.models, "model", name)?;
        super::load_json(&entry.clips)
    }

    pub fn clips_path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.models, "model", name)?;
        Ok(resolve_path(&entry.clips))
    }

    pub fn settings<T: DeserializeOwned>(name: &str) -> Result<Option<T>> {
        let entry = lookup(&MANIFEST.models, "model", name)?;
        match &entry.settings {
            Some(settings) => super::load_json(settings).map(Some),
            None => Ok(None),
        }
    }

    pub fn settings_path(name: &str) -> Result<Option<PathBuf>> {
        let entry = lookup(&MANIFEST.models, "model", name)?;
        Ok(entry.settings.as_deref().map(resolve_path))
    }
}
