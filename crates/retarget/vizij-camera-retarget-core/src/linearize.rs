//! Tangent linearization.
//!
//! Keyframe reduction on import fits the engine's curves to the DCC interpolation and
//! overshoots badly where a key pair's segment is strongly curved relative to its chord.
//! For every adjacent key pair of every component, the pre-remap curve is sampled across
//! the pair; when the sampled path is more than `ratio_threshold` times the chord, both
//! facing slopes are replaced by the chord slope. Times and values are never touched.

use log::debug;

use crate::config::LinearizeConfig;
use crate::curves::CurveSet;
use crate::groups::CurveGroupStore;
use crate::interp::functions::{length_ratio, linear_tangent};
use crate::sampling::sample_segment;

/// Counters reported by a linearization pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinearizeStats {
    pub segments_examined: usize,
    pub segments_linearized: usize,
}

/// Whether sampled points across one key pair bend enough to be flattened.
///
/// A zero-length chord is never flattened.
pub fn segment_needs_linearization(samples: &[(f64, f64)], ratio_threshold: f64) -> bool {
    length_ratio(samples).is_some_and(|ratio| ratio > ratio_threshold)
}

/// Linearize every grouped record in place.
///
/// `reference` holds the curves as they were right after remapping; a component with no
/// reference curve is sampled from its own keys.
pub fn linearize_tangents(
    groups: &mut CurveGroupStore,
    reference: &CurveSet,
    config: &LinearizeConfig,
) -> LinearizeStats {
    let mut stats = LinearizeStats::default();
    for (category, record) in groups.iter_mut() {
        if record.keys.len() < 2 {
            continue;
        }
        for c in 0..record.arity() {
            let binding = record.component_binding(c);
            let sampled = match reference.get(&binding) {
                Some(curve) => curve.keys.clone(),
                None => record.component_keys(c),
            };
            // the last key has no successor, so its out-slope is never considered
            for h in 0..record.keys.len() - 1 {
                let (t1, v1) = (record.keys[h].time, record.keys[h].value[c]);
                let (t2, v2) = (record.keys[h + 1].time, record.keys[h + 1].value[c]);
                stats.segments_examined += 1;

                let samples = sample_segment(&sampled, t1, t2, config.segments);
                if !segment_needs_linearization(&samples, config.ratio_threshold) {
                    continue;
                }
                let tangent = linear_tangent(v1, t1, v2, t2);
                record.keys[h].out_slope[c] = tangent;
                record.keys[h + 1].in_slope[c] = tangent;
                stats.segments_linearized += 1;
                debug!(
                    "linearized {:?} '{}' [{t1}, {t2}] -> slope {tangent}",
                    category, binding.property_name
                );
            }
        }
    }
    stats
}

/// Group `curves`, linearize, and write the slopes back.
pub fn linearize_curve_set(
    curves: &mut CurveSet,
    reference: &CurveSet,
    config: &LinearizeConfig,
) -> LinearizeStats {
    let mut groups = CurveGroupStore::from_curve_set(curves);
    let stats = linearize_tangents(&mut groups, reference, config);
    groups.write_back(curves);
    stats
}
