//! Vizij Camera Retarget Core (engine-agnostic)
//!
//! Retargets camera clips exported from a DCC tool onto engine camera bindings:
//! lens parameters packed into scale curves are rebound onto camera properties,
//! the rotation curves get a 180° yaw correction, and key tangents that would
//! otherwise overshoot after import are linearized.
//!
//! Pipeline per clip: remap → rotation correction → tangent linearization.
//! Asset discovery and persistence are supplied by adapters through the
//! [`AssetSource`] and [`ClipStore`] traits.

pub mod config;
pub mod curves;
pub mod data;
pub mod error;
pub mod groups;
pub mod importer;
pub mod interp;
pub mod linearize;
pub mod naming;
pub mod properties;
pub mod remap;
pub mod retarget;
pub mod rotation;
pub mod sampling;
pub mod settings;

// Re-exports for consumers (adapters)
pub use config::{LinearizeConfig, RetargetConfig};
pub use curves::CurveSet;
pub use data::{
    AnimationEvent, ClipMetadata, ClipSettings, ClipSource, ClipTarget, Curve, CurveBinding,
    CurveCategory, Keyframe, TargetType, WrapMode,
};
pub use error::{ImportError, RetargetError};
pub use groups::{CurveGroupStore, GroupKeyframe, GroupedCurve};
pub use importer::{AssetSource, CameraImporter, ClipOutcome, ClipReport, ClipStore, ImportReport};
pub use linearize::{linearize_curve_set, linearize_tangents, LinearizeStats};
pub use naming::NamingContext;
pub use remap::{remap_binding, remap_curves, LensProperty};
pub use retarget::{RetargetSummary, Retargeter};
pub use rotation::{correct_camera_rotation, RotationMode};
pub use sampling::{evaluate_curve, sample_segment};
pub use settings::{preprocess_import, AnimationCompression, ImportSettings, ModelAnimationType};
