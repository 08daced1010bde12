//! File-name derived import context.
//!
//! The DCC export encodes its intent in the model file name:
//!   "mCam_Shot01.fbx"    -> camera export, target = camera component
//!   "mCam_Shot01_VC.fbx" -> camera export, target = virtual camera rig
//!   "Props.fbx"          -> not a camera export, left alone
//! The context is derived once per import and threaded through every stage.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::RetargetConfig;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingContext {
    /// Stem carries the camera prefix.
    pub is_camera_source: bool,
    /// Stem carries the virtual camera suffix.
    pub is_virtual_camera: bool,
    /// Base name exported clips are named after (the source file stem).
    pub exported_clip_name: String,
}

impl NamingContext {
    /// Derive the context from a bare file stem.
    pub fn from_stem(stem: &str, config: &RetargetConfig) -> Self {
        Self {
            is_camera_source: stem.starts_with(&config.camera_prefix),
            is_virtual_camera: stem.ends_with(&config.virtual_camera_suffix),
            exported_clip_name: stem.to_string(),
        }
    }

    /// Derive the context from the imported model's path.
    pub fn from_path(path: &Path, config: &RetargetConfig) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_stem(&stem, config)
    }

    /// File name of the clip exported for `clip_name`.
    ///
    /// The clip name is appended with an underscore unless the stem already contains it.
    pub fn export_file_name(&self, clip_name: &str, extension: &str) -> String {
        let stem = &self.exported_clip_name;
        if clip_name.is_empty() || stem.contains(clip_name) {
            format!("{stem}.{extension}")
        } else {
            format!("{stem}_{clip_name}.{extension}")
        }
    }

    /// Path of the exported clip: next to the source model.
    pub fn export_path(&self, source: &Path, clip_name: &str, config: &RetargetConfig) -> PathBuf {
        let file_name = self.export_file_name(clip_name, &config.export_extension);
        match source.parent() {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_camera_and_virtual_camera_stems() {
        let cfg = RetargetConfig::default();
        let vc = NamingContext::from_path(Path::new("Assets/Cams/mCam_Shot01_VC.fbx"), &cfg);
        assert!(vc.is_camera_source);
        assert!(vc.is_virtual_camera);
        assert_eq!(vc.exported_clip_name, "mCam_Shot01_VC");

        let cam = NamingContext::from_path(Path::new("mCam_Shot01.fbx"), &cfg);
        assert!(cam.is_camera_source);
        assert!(!cam.is_virtual_camera);

        let other = NamingContext::from_path(Path::new("Assets/Props_VC.fbx"), &cfg);
        assert!(!other.is_camera_source);
    }

    #[test]
    fn export_path_appends_clip_name_once() {
        let cfg = RetargetConfig::default();
        let ctx = NamingContext::from_stem("mCam_Shot01", &cfg);
        let src = Path::new("Assets/Cams/mCam_Shot01.fbx");
        assert_eq!(
            ctx.export_path(src, "Take 001", &cfg),
            PathBuf::from("Assets/Cams/mCam_Shot01_Take 001.anim")
        );
        assert_eq!(
            ctx.export_path(src, "Shot01", &cfg),
            PathBuf::from("Assets/Cams/mCam_Shot01.anim")
        );
        assert_eq!(
            ctx.export_path(Path::new("mCam_Shot01.fbx"), "A", &cfg),
            PathBuf::from("mCam_Shot01_A.anim")
        );
    }
}
