//! Heading correction for cameras exported from the DCC tool.
//!
//! The DCC camera looks down -Z while the engine camera looks down +Z, so every rotation
//! key is turned 180° about the vertical axis. Rotation is keyed per axis, so each
//! object's axis curves are first merged into one composite value per key time, corrected,
//! and split back into the same curves. Only key values change; times and slopes are kept.
//!
//! A time keyed on one axis but not on another reads the missing axis as 0 when the
//! composite is built. That is lossy for unevenly keyed rotations and is kept as is.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::debug;
use nalgebra::{Quaternion, UnitQuaternion, Vector3};

use crate::curves::CurveSet;
use crate::data::{CurveBinding, TargetType};
use crate::properties::{EULER_ANGLES, ROTATION};

/// How rotation is stored in the imported clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationMode {
    /// Resampled import: `rotation.x/y/z/w` quaternion curves.
    Quaternion,
    /// Raw import: `euler_angles.x/y/z` curves in degrees.
    Euler,
}

impl RotationMode {
    pub fn from_resample(resample_curves: bool) -> Self {
        if resample_curves {
            RotationMode::Quaternion
        } else {
            RotationMode::Euler
        }
    }

    pub fn property_base(self) -> &'static str {
        match self {
            RotationMode::Quaternion => ROTATION,
            RotationMode::Euler => EULER_ANGLES,
        }
    }

    pub fn arity(self) -> usize {
        match self {
            RotationMode::Quaternion => 4,
            RotationMode::Euler => 3,
        }
    }
}

/// Key time usable as an ordered map key (exact match on the stored f64).
#[derive(Clone, Copy, Debug)]
struct TimeKey(f64);

impl TimeKey {
    fn new(t: f64) -> Self {
        // -0.0 and 0.0 are the same key time
        TimeKey(if t == 0.0 { 0.0 } else { t })
    }
}

impl PartialEq for TimeKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TimeKey {}

impl PartialOrd for TimeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Compose `q` (x, y, z, w) with a yaw of `degrees` about +Y: `q * yaw`.
///
/// The product is not renormalized; components are written back as keyed.
pub fn yaw_corrected_quaternion(q: [f64; 4], degrees: f64) -> [f64; 4] {
    let original = Quaternion::new(q[3], q[0], q[1], q[2]);
    let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), degrees.to_radians());
    let out = original * yaw.into_inner();
    [out.i, out.j, out.k, out.w]
}

/// Add `degrees` to the euler y angle, wrapping once into [0, 360).
pub fn yaw_corrected_euler(e: [f64; 3], degrees: f64) -> [f64; 3] {
    let mut y = e[1] + degrees;
    if y >= 360.0 {
        y -= 360.0;
    }
    [e[0], y, e[2]]
}

/// Composite values per key time for one object's rotation curves.
fn collect_frames(
    curves: &CurveSet,
    path: &str,
    target_type: TargetType,
    mode: RotationMode,
) -> BTreeMap<TimeKey, [f64; 4]> {
    let mut frames: BTreeMap<TimeKey, [f64; 4]> = BTreeMap::new();
    for (idx, curve) in curves.components_of(path, target_type, mode.property_base()) {
        if idx >= mode.arity() {
            continue;
        }
        for key in &curve.keys {
            frames.entry(TimeKey::new(key.time)).or_insert([0.0; 4])[idx] = key.value;
        }
    }
    frames
}

/// Apply the yaw correction to every rotation curve in `curves`.
///
/// Returns the number of composite key times corrected.
pub fn correct_camera_rotation(curves: &mut CurveSet, mode: RotationMode, degrees: f64) -> usize {
    let mut corrected_frames = 0;
    for (path, target_type) in curves.objects_with(mode.property_base()) {
        let frames = collect_frames(curves, &path, target_type, mode);
        let corrected: BTreeMap<TimeKey, [f64; 4]> = frames
            .into_iter()
            .map(|(t, v)| {
                let out = match mode {
                    RotationMode::Quaternion => yaw_corrected_quaternion(v, degrees),
                    RotationMode::Euler => {
                        let e = yaw_corrected_euler([v[0], v[1], v[2]], degrees);
                        [e[0], e[1], e[2], 0.0]
                    }
                };
                (t, out)
            })
            .collect();
        corrected_frames += corrected.len();

        let bindings: Vec<(usize, CurveBinding)> = curves
            .components_of(&path, target_type, mode.property_base())
            .filter(|(idx, _)| *idx < mode.arity())
            .map(|(idx, c)| (idx, c.binding.clone()))
            .collect();
        for (idx, binding) in bindings {
            if let Some(keys) = curves.keys_mut(&binding) {
                for key in keys.iter_mut() {
                    if let Some(v) = corrected.get(&TimeKey::new(key.time)) {
                        key.value = v[idx];
                    }
                }
            }
        }
        debug!(
            "corrected {:?} rotation on '{}' ({} key times)",
            mode,
            path,
            corrected.len()
        );
    }
    corrected_frames
}
