use approx::assert_relative_eq;
use vizij_camera_retarget_core::{
    properties::{
        CAMERA_FAR_CLIP_PLANE, CAMERA_FIELD_OF_VIEW, CAMERA_NEAR_CLIP_PLANE,
        VIRTUAL_CAMERA_FIELD_OF_VIEW,
    },
    AnimationCompression, ClipSource, ClipTarget, CurveBinding, ImportSettings, Keyframe,
    NamingContext, RetargetConfig, RetargetError, Retargeter, TargetType, WrapMode,
};
use vizij_test_fixtures::models;

fn load_clips(name: &str) -> Vec<ClipSource> {
    models::clips(name).expect("fixture clips")
}

fn load_settings(name: &str) -> ImportSettings {
    models::settings(name)
        .expect("fixture settings")
        .unwrap_or_default()
}

fn naming_for(name: &str) -> NamingContext {
    let file = models::model_file_name(name).expect("model name");
    NamingContext::from_path(std::path::Path::new(&file), &RetargetConfig::default())
}

fn keys_of(clip: &ClipTarget, binding: &CurveBinding) -> Vec<Keyframe> {
    clip.curves
        .get(binding)
        .unwrap_or_else(|| panic!("missing curve {binding:?}"))
        .keys
        .clone()
}

fn values(keys: &[Keyframe]) -> Vec<f64> {
    keys.iter().map(|k| k.value).collect()
}

#[test]
fn virtual_camera_fov_end_to_end() {
    let clips = load_clips("shot01-vc");
    let naming = naming_for("shot01-vc");
    assert!(naming.is_virtual_camera);
    let retargeter = Retargeter::new(RetargetConfig::default());

    let settings = ImportSettings::default();
    let target = retargeter
        .retarget(&clips[0], &naming, &settings)
        .expect("retarget");
    assert_eq!(target.curves.len(), 1);
    let fov = keys_of(
        &target,
        &CurveBinding::new("", TargetType::VirtualCamera, VIRTUAL_CAMERA_FIELD_OF_VIEW),
    );
    assert_eq!(values(&fov), vec![35.0, 50.0]);
    assert_relative_eq!(fov[0].out_slope, 15.0);
    assert_relative_eq!(fov[1].in_slope, 15.0);
    // outer sides are not part of any pair
    assert_eq!(fov[0].in_slope, 300.0);
    assert_eq!(fov[1].out_slope, 300.0);

    let off = ImportSettings {
        compression: AnimationCompression::Off,
        ..ImportSettings::default()
    };
    let target = retargeter.retarget(&clips[0], &naming, &off).expect("retarget");
    let fov = keys_of(
        &target,
        &CurveBinding::new("", TargetType::VirtualCamera, VIRTUAL_CAMERA_FIELD_OF_VIEW),
    );
    assert_eq!(fov[0].out_slope, 300.0);
    assert_eq!(fov[1].in_slope, 300.0);
}

#[test]
fn metadata_is_copied_from_source() {
    let clips = load_clips("dolly");
    let retargeter = Retargeter::default();
    let target = retargeter
        .retarget(&clips[0], &naming_for("dolly"), &load_settings("dolly"))
        .expect("retarget");
    assert_eq!(target.name(), "Dolly");
    assert_eq!(target.metadata.frame_rate, 30.0);
    assert_eq!(target.metadata.wrap_mode, WrapMode::ClampForever);
    assert_eq!(target.metadata.events.len(), 1);
    assert_eq!(target.metadata.events[0].function_name, "OnFocusPull");
    assert_eq!(target.metadata.settings.stop_time, 2.0);
}

#[test]
fn dolly_camera_full_pass() {
    let clips = load_clips("dolly");
    let source = &clips[0];
    let naming = naming_for("dolly");
    assert!(!naming.is_virtual_camera);
    let retargeter = Retargeter::default();
    let target = retargeter
        .retarget(source, &naming, &load_settings("dolly"))
        .expect("retarget");
    assert_eq!(target.curves.len(), source.curves().len());

    // lens channels land on the camera with values unchanged
    let near = keys_of(&target, &CurveBinding::new("", TargetType::Camera, CAMERA_NEAR_CLIP_PLANE));
    let far = keys_of(&target, &CurveBinding::new("", TargetType::Camera, CAMERA_FAR_CLIP_PLANE));
    let fov = keys_of(&target, &CurveBinding::new("", TargetType::Camera, CAMERA_FIELD_OF_VIEW));
    assert_eq!(values(&near), vec![0.1, 0.1]);
    assert_eq!(values(&far), vec![1000.0, 1000.0]);
    assert_eq!(values(&fov), vec![60.0, 40.0, 40.0]);
    assert!(target
        .curves
        .get(&CurveBinding::transform("scale.z"))
        .is_none());

    // rotation turned half way round
    let y = values(&keys_of(&target, &CurveBinding::transform("rotation.y")));
    let w = values(&keys_of(&target, &CurveBinding::transform("rotation.w")));
    assert_relative_eq!(y[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(w[0], 0.0, epsilon = 1e-9);
    assert_relative_eq!(y[1], 0.9238795325112867, epsilon = 1e-9);
    assert_relative_eq!(w[1], -0.3826834323650898, epsilon = 1e-9);

    // the overshooting dolly-in segment is flattened, the rest keeps its slopes
    let z = keys_of(&target, &CurveBinding::transform("position.z"));
    assert_relative_eq!(z[0].out_slope, 5.0);
    assert_relative_eq!(z[1].in_slope, 5.0);
    assert_eq!(z[1].out_slope, 0.0);
    assert_eq!(values(&z), vec![-10.0, -5.0, -5.0]);
    let x = keys_of(&target, &CurveBinding::transform("position.x"));
    let src_x = &source
        .curves()
        .get(&CurveBinding::transform("position.x"))
        .unwrap()
        .keys;
    assert_eq!(&x, src_x);
}

#[test]
fn verbatim_curves_match_source_when_uncorrected() {
    let clips = load_clips("dolly");
    let source = &clips[0];
    let settings = ImportSettings {
        compression: AnimationCompression::Off,
        ..load_settings("dolly")
    };
    let target = Retargeter::default()
        .retarget(source, &naming_for("dolly"), &settings)
        .expect("retarget");
    for curve in source.curves().iter() {
        let name = curve.property_name();
        if name.starts_with("scale.") || name.starts_with("rotation.") {
            continue;
        }
        let out = target
            .curves
            .get(&CurveBinding::new("", TargetType::Transform, name))
            .expect("verbatim curve");
        assert_eq!(out.keys, curve.keys, "{name}");
    }
}

#[test]
fn euler_pan_without_compression() {
    let clips = load_clips("pan-euler");
    let settings = load_settings("pan-euler");
    assert!(!settings.resample_curves);
    assert!(!settings.compression_enabled());
    let target = Retargeter::default()
        .retarget(&clips[0], &naming_for("pan-euler"), &settings)
        .expect("retarget");

    let y = keys_of(&target, &CurveBinding::transform("euler_angles.y"));
    assert_eq!(values(&y), vec![180.0, 270.0, 20.0]);
    assert_eq!(y[1].out_slope, 110.0);
    let x = keys_of(&target, &CurveBinding::transform("euler_angles.x"));
    assert_eq!(values(&x), vec![10.0, 10.0, 15.0]);
    let z = keys_of(&target, &CurveBinding::transform("euler_angles.z"));
    assert_eq!(values(&z), vec![0.0, 0.0]);
}

#[test]
fn repeated_passes_are_identical() {
    let clips = load_clips("dolly");
    let naming = naming_for("dolly");
    let settings = load_settings("dolly");
    let retargeter = Retargeter::default();
    let first = retargeter.retarget(&clips[0], &naming, &settings).unwrap();
    let second = retargeter.retarget(&clips[0], &naming, &settings).unwrap();
    assert_eq!(first, second);

    // reusing a previously written clip does not accumulate curves
    let mut reused = first.clone();
    reused.set_curve(CurveBinding::transform("stale"), vec![Keyframe::new(0.0, 1.0)]);
    retargeter
        .retarget_into(&clips[0], &mut reused, &naming, &settings)
        .unwrap();
    assert_eq!(reused, first);
}

#[test]
fn empty_clip_is_reported() {
    let clips = load_clips("empty");
    let err = Retargeter::default()
        .retarget(&clips[0], &naming_for("empty"), &ImportSettings::default())
        .unwrap_err();
    assert_eq!(
        err,
        RetargetError::EmptyCurveSet {
            clip: "Take 001".into()
        }
    );
}
