//! Canonical clip data model shared by the source (DCC export) and target (engine) sides.

use serde::{Deserialize, Serialize};

use crate::curves::CurveSet;
use crate::properties::ROTATION;

/// A single curve key: time in seconds, value, and Hermite slopes (value units per second).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    pub time: f64,
    pub value: f64,
    #[serde(default)]
    pub in_slope: f64,
    #[serde(default)]
    pub out_slope: f64,
}

impl Keyframe {
    /// Key with flat slopes.
    pub fn new(time: f64, value: f64) -> Self {
        Self {
            time,
            value,
            in_slope: 0.0,
            out_slope: 0.0,
        }
    }

    pub fn with_slopes(time: f64, value: f64, in_slope: f64, out_slope: f64) -> Self {
        Self {
            time,
            value,
            in_slope,
            out_slope,
        }
    }
}

/// Object type a binding resolves against on the engine side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetType {
    Transform,
    Camera,
    VirtualCamera,
}

/// Association of a curve with a target object (relative path + type) and a property.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveBinding {
    /// Path from the animated root to the target object ("" = the root itself).
    #[serde(default)]
    pub path: String,
    pub target_type: TargetType,
    pub property_name: String,
}

impl CurveBinding {
    pub fn new(
        path: impl Into<String>,
        target_type: TargetType,
        property_name: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            target_type,
            property_name: property_name.into(),
        }
    }

    /// Binding on the animated root's transform.
    pub fn transform(property_name: impl Into<String>) -> Self {
        Self::new("", TargetType::Transform, property_name)
    }
}

/// Semantic grouping of a curve, mirroring how the engine serializes curves.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum CurveCategory {
    #[default]
    Scalar,
    Vector3,
    Vector4,
    Rotation,
}

impl CurveCategory {
    /// Number of components a grouped record of this category carries.
    pub fn arity(self) -> usize {
        match self {
            CurveCategory::Scalar => 1,
            CurveCategory::Vector3 => 3,
            CurveCategory::Vector4 | CurveCategory::Rotation => 4,
        }
    }

    /// Category of the component curves of `base`, given the highest component index keyed
    /// among its siblings.
    pub fn classify(base: &str, max_component: usize) -> Self {
        if base == ROTATION {
            CurveCategory::Rotation
        } else if max_component >= 3 {
            CurveCategory::Vector4
        } else {
            CurveCategory::Vector3
        }
    }
}

/// An ordered sequence of keys bound to one property component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub binding: CurveBinding,
    /// Assigned by [`CurveSet`] from the binding and its siblings.
    #[serde(default)]
    pub category: CurveCategory,
    #[serde(default)]
    pub keys: Vec<Keyframe>,
}

impl Curve {
    pub fn new(binding: CurveBinding, keys: Vec<Keyframe>) -> Self {
        Self {
            binding,
            category: CurveCategory::Scalar,
            keys,
        }
    }

    pub fn property_name(&self) -> &str {
        &self.binding.property_name
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Clip wrap behaviour outside its time range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WrapMode {
    #[default]
    Default,
    Once,
    Loop,
    PingPong,
    ClampForever,
}

/// A function callback fired at a clip time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationEvent {
    pub time: f64,
    pub function_name: String,
    pub string_parameter: String,
    pub float_parameter: f64,
    pub int_parameter: i64,
}

/// Per-clip import settings copied verbatim from the source clip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClipSettings {
    pub start_time: f64,
    pub stop_time: f64,
    pub loop_time: bool,
    pub loop_blend: bool,
    pub cycle_offset: f64,
    pub mirror: bool,
    pub keep_original_orientation: bool,
    pub keep_original_position_y: bool,
    pub keep_original_position_xz: bool,
    pub height_from_feet: bool,
}

/// Clip-level metadata shared by source and target clips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClipMetadata {
    pub name: String,
    pub legacy: bool,
    pub frame_rate: f64,
    pub wrap_mode: WrapMode,
    pub events: Vec<AnimationEvent>,
    pub settings: ClipSettings,
}

impl Default for ClipMetadata {
    fn default() -> Self {
        Self {
            name: String::new(),
            legacy: false,
            frame_rate: 30.0,
            wrap_mode: WrapMode::Default,
            events: Vec::new(),
            settings: ClipSettings::default(),
        }
    }
}

/// A clip as read from the imported model. Read-only for the duration of a pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipSource {
    #[serde(flatten)]
    metadata: ClipMetadata,
    #[serde(default)]
    curves: CurveSet,
}

impl ClipSource {
    pub fn new(metadata: ClipMetadata, curves: CurveSet) -> Self {
        Self { metadata, curves }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn metadata(&self) -> &ClipMetadata {
        &self.metadata
    }

    pub fn curves(&self) -> &CurveSet {
        &self.curves
    }
}

/// The engine-side clip assembled by a retarget pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipTarget {
    #[serde(flatten)]
    pub metadata: ClipMetadata,
    #[serde(default)]
    pub curves: CurveSet,
}

impl ClipTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: ClipMetadata {
                name: name.into(),
                ..ClipMetadata::default()
            },
            curves: CurveSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Copy name, legacy flag, frame rate, wrap mode, events and clip settings.
    pub fn copy_metadata_from(&mut self, source: &ClipSource) {
        self.metadata = source.metadata().clone();
    }

    /// Drop every curve while keeping metadata (reused on-disk clips).
    pub fn clear_curves(&mut self) {
        self.curves.clear();
    }

    /// Bind `keys` under `binding`, replacing any curve already bound there.
    pub fn set_curve(&mut self, binding: CurveBinding, keys: Vec<Keyframe>) {
        self.curves.set_curve(binding, keys);
    }
}
