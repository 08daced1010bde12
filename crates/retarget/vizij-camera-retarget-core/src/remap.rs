//! Property remapping from DCC transform curves onto engine camera bindings.
//!
//! The exporter stores lens animation in the camera transform's scale:
//!   scale.x -> near clip plane, scale.y -> far clip plane, scale.z -> field of view
//! Every other property is copied verbatim onto the transform. Values are never changed
//! here; only the binding differs.

use log::debug;

use crate::curves::CurveSet;
use crate::data::{CurveBinding, TargetType};
use crate::naming::NamingContext;
use crate::properties::{
    split_component, CAMERA_FAR_CLIP_PLANE, CAMERA_FIELD_OF_VIEW, CAMERA_NEAR_CLIP_PLANE, SCALE,
    VIRTUAL_CAMERA_FAR_CLIP_PLANE, VIRTUAL_CAMERA_FIELD_OF_VIEW, VIRTUAL_CAMERA_NEAR_CLIP_PLANE,
};

/// Lens parameters carried by the scale channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LensProperty {
    NearClipPlane,
    FarClipPlane,
    FieldOfView,
}

impl LensProperty {
    /// Lens parameter packed into a source property, if any.
    pub fn from_source_property(property_name: &str) -> Option<Self> {
        match split_component(property_name) {
            Some((SCALE, 0)) => Some(LensProperty::NearClipPlane),
            Some((SCALE, 1)) => Some(LensProperty::FarClipPlane),
            Some((SCALE, 2)) => Some(LensProperty::FieldOfView),
            _ => None,
        }
    }

    pub fn camera_property(self) -> &'static str {
        match self {
            LensProperty::NearClipPlane => CAMERA_NEAR_CLIP_PLANE,
            LensProperty::FarClipPlane => CAMERA_FAR_CLIP_PLANE,
            LensProperty::FieldOfView => CAMERA_FIELD_OF_VIEW,
        }
    }

    pub fn virtual_camera_property(self) -> &'static str {
        match self {
            LensProperty::NearClipPlane => VIRTUAL_CAMERA_NEAR_CLIP_PLANE,
            LensProperty::FarClipPlane => VIRTUAL_CAMERA_FAR_CLIP_PLANE,
            LensProperty::FieldOfView => VIRTUAL_CAMERA_FIELD_OF_VIEW,
        }
    }

    /// Target binding for this lens parameter on the object at `path`.
    pub fn binding(self, path: &str, naming: &NamingContext) -> CurveBinding {
        if naming.is_virtual_camera {
            CurveBinding::new(path, TargetType::VirtualCamera, self.virtual_camera_property())
        } else {
            CurveBinding::new(path, TargetType::Camera, self.camera_property())
        }
    }
}

/// Target bindings that receive a copy of the curve bound at `source`.
///
/// Always returns at least one binding: unknown properties fall through to the transform.
pub fn remap_binding(source: &CurveBinding, naming: &NamingContext) -> Vec<CurveBinding> {
    match LensProperty::from_source_property(&source.property_name) {
        Some(lens) => vec![lens.binding(&source.path, naming)],
        None => vec![CurveBinding::new(
            source.path.clone(),
            TargetType::Transform,
            source.property_name.clone(),
        )],
    }
}

/// Copy every source curve onto its remapped bindings in `target`.
///
/// Returns the number of target curves written.
pub fn remap_curves(source: &CurveSet, naming: &NamingContext, target: &mut CurveSet) -> usize {
    let mut written = 0;
    for curve in source.iter() {
        for binding in remap_binding(&curve.binding, naming) {
            debug!(
                "remap '{}' -> {:?} '{}' ({} keys)",
                curve.binding.property_name,
                binding.target_type,
                binding.property_name,
                curve.keys.len()
            );
            target.set_curve(binding, curve.keys.clone());
            written += 1;
        }
    }
    written
}
