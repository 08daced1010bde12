//! Property naming shared by the remapper, the rotation corrector and the group store.
//!
//! Source curves use `base.axis` names ("scale.x", "rotation.w"). Target lens
//! properties use the engine's own serialized names, which differ between the
//! plain camera component and the virtual camera rig.

/// Transform scale; the DCC exporter packs lens data into it.
pub const SCALE: &str = "scale";
/// Transform rotation as quaternion components (resampled import).
pub const ROTATION: &str = "rotation";
/// Transform rotation as raw euler angles in degrees (non-resampled import).
pub const EULER_ANGLES: &str = "euler_angles";

pub const CAMERA_NEAR_CLIP_PLANE: &str = "near clip plane";
pub const CAMERA_FAR_CLIP_PLANE: &str = "far clip plane";
pub const CAMERA_FIELD_OF_VIEW: &str = "field of view";

pub const VIRTUAL_CAMERA_NEAR_CLIP_PLANE: &str = "m_Lens.NearClipPlane";
pub const VIRTUAL_CAMERA_FAR_CLIP_PLANE: &str = "m_Lens.FarClipPlane";
pub const VIRTUAL_CAMERA_FIELD_OF_VIEW: &str = "m_Lens.FieldOfView";

/// Split `base.axis` into its parts when the suffix is a single vector/color component.
///
/// "rotation.w" -> Some(("rotation", 3)), "m_Lens.FieldOfView" -> None.
pub fn split_component(property_name: &str) -> Option<(&str, usize)> {
    let (base, axis) = property_name.rsplit_once('.')?;
    if base.is_empty() {
        return None;
    }
    component_index(axis).map(|idx| (base, idx))
}

/// Component index of a single-letter axis name.
pub fn component_index(axis: &str) -> Option<usize> {
    match axis {
        "x" | "r" => Some(0),
        "y" | "g" => Some(1),
        "z" | "b" => Some(2),
        "w" | "a" => Some(3),
        _ => None,
    }
}

/// Property name for component `idx` of `base`, using xyzw naming.
pub fn component_name(base: &str, idx: usize) -> String {
    let axis = match idx {
        0 => "x",
        1 => "y",
        2 => "z",
        _ => "w",
    };
    format!("{base}.{axis}")
}
