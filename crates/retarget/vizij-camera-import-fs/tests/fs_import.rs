use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vizij_camera_import_fs::{
    clips_path, fs_importer, import_model, settings_path, FsClipStore, JsonAssetSource,
};
use vizij_camera_retarget_core::{
    AssetSource, ClipOutcome, ClipStore, ClipTarget, CurveBinding, ImportError, ImportSettings,
    ModelAnimationType, RetargetConfig,
};
use vizij_test_fixtures::models;

/// Lay a fixture model out on disk (model file plus sidecars) and return the model path.
fn stage(dir: &Path, name: &str) -> PathBuf {
    let model = dir.join(models::model_file_name(name).unwrap());
    fs::write(&model, b"").unwrap();
    fs::copy(models::clips_path(name).unwrap(), clips_path(&model)).unwrap();
    if let Some(settings) = models::settings_path(name).unwrap() {
        fs::copy(settings, settings_path(&model)).unwrap();
    }
    model
}

#[test]
fn import_writes_anim_next_to_model() {
    let dir = TempDir::new().unwrap();
    let model = stage(dir.path(), "dolly");

    let mut importer = fs_importer(RetargetConfig::default());
    let report = importer.import(&model).unwrap();
    assert_eq!(report.clips.len(), 1);
    let export = dir.path().join("mCam_Dolly.anim");
    assert_eq!(report.clips[0].export_path, export);
    assert_eq!(report.clips[0].outcome, ClipOutcome::Created);
    assert!(export.is_file());

    let mut store = FsClipStore::new();
    let clip = store.load(&export).unwrap().expect("stored clip");
    assert_eq!(clip.name(), "Dolly");
    assert!(clip
        .curves
        .get(&CurveBinding::transform("scale.z"))
        .is_none());

    let report = importer.import(&model).unwrap();
    assert_eq!(report.clips[0].outcome, ClipOutcome::Replaced);
    assert_eq!(store.load(&export).unwrap(), Some(clip));
}

#[test]
fn missing_settings_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let model = stage(dir.path(), "shot01-vc");
    let mut source = JsonAssetSource::new();
    assert_eq!(
        source.import_settings(&model).unwrap(),
        ImportSettings::default()
    );
    let clips = source.load_clips(&model).unwrap();
    assert_eq!(clips.len(), 2);
}

#[test]
fn missing_clips_sidecar_is_a_source_error() {
    let dir = TempDir::new().unwrap();
    let model = dir.path().join("mCam_Nothing.fbx");
    let err = fs_importer(RetargetConfig::default())
        .import(&model)
        .unwrap_err();
    assert!(matches!(err, ImportError::Source { .. }));
}

#[test]
fn store_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Assets/Cams/nested/mCam_A.anim");
    let mut store = FsClipStore::new();
    assert!(!store.exists(&path));
    assert_eq!(store.load(&path).unwrap(), None);

    store.save(&path, &ClipTarget::new("A")).unwrap();
    assert!(store.exists(&path));
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains('\n'));
}

#[test]
fn corrupt_clip_is_a_store_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mCam_A.anim");
    fs::write(&path, "not json").unwrap();
    let err = FsClipStore::new().load(&path).unwrap_err();
    assert!(matches!(err, ImportError::Store { .. }));
}

#[test]
fn import_model_persists_preprocessed_settings() {
    let dir = TempDir::new().unwrap();
    let model = stage(dir.path(), "shot01-vc");
    let seeded = ImportSettings {
        import_animation: false,
        animation_type: ModelAnimationType::Human,
        ..ImportSettings::default()
    };
    fs::write(
        settings_path(&model),
        serde_json::to_string(&seeded).unwrap(),
    )
    .unwrap();

    let report = import_model(&model, RetargetConfig::default()).unwrap();
    assert_eq!(report.written().count(), 1);

    let saved: ImportSettings =
        serde_json::from_str(&fs::read_to_string(settings_path(&model)).unwrap()).unwrap();
    assert!(saved.import_animation);
    assert_eq!(saved.animation_type, ModelAnimationType::Generic);
    assert!(dir.path().join("mCam_Shot01_VC_Take 001.anim").is_file());
}

#[test]
fn non_camera_model_leaves_directory_untouched() {
    let dir = TempDir::new().unwrap();
    let model = dir.path().join("Props.fbx");
    fs::write(&model, b"").unwrap();
    let report = import_model(&model, RetargetConfig::default()).unwrap();
    assert!(report.clips.is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
