//! Low-level grouped view of a [`CurveSet`], matching how the engine serializes clips:
//! one record per vector/rotation property with multi-component keys, plus one record per
//! scalar curve.
//!
//! Component curves are grouped only when every component is present and all of them are
//! keyed at the same times; otherwise each component stays a scalar record. Writing back
//! touches slopes only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::curves::CurveSet;
use crate::data::{Curve, CurveBinding, CurveCategory, Keyframe, TargetType};
use crate::properties::split_component;

/// One key of a grouped record. Components past the record's arity are unused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupKeyframe {
    pub time: f64,
    pub value: [f64; 4],
    pub in_slope: [f64; 4],
    pub out_slope: [f64; 4],
}

/// A curve record inside a group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedCurve {
    pub path: String,
    pub target_type: TargetType,
    /// Property names of the components, in component order.
    pub components: Vec<String>,
    pub keys: Vec<GroupKeyframe>,
}

impl GroupedCurve {
    pub fn arity(&self) -> usize {
        self.components.len()
    }

    pub fn component_binding(&self, component: usize) -> CurveBinding {
        CurveBinding::new(
            self.path.clone(),
            self.target_type,
            self.components[component].clone(),
        )
    }

    /// Per-axis keyframe view of one component.
    pub fn component_keys(&self, component: usize) -> Vec<Keyframe> {
        self.keys
            .iter()
            .map(|k| Keyframe {
                time: k.time,
                value: k.value[component],
                in_slope: k.in_slope[component],
                out_slope: k.out_slope[component],
            })
            .collect()
    }

    fn scalar(curve: &Curve) -> Self {
        Self::from_components(&curve.binding.path, curve.binding.target_type, &[curve])
    }

    fn from_components(path: &str, target_type: TargetType, parts: &[&Curve]) -> Self {
        let len = parts.first().map(|c| c.keys.len()).unwrap_or(0);
        let keys = (0..len)
            .map(|i| {
                let mut key = GroupKeyframe {
                    time: parts[0].keys[i].time,
                    ..GroupKeyframe::default()
                };
                for (c, part) in parts.iter().enumerate() {
                    let k = &part.keys[i];
                    key.value[c] = k.value;
                    key.in_slope[c] = k.in_slope;
                    key.out_slope[c] = k.out_slope;
                }
                key
            })
            .collect();
        Self {
            path: path.to_string(),
            target_type,
            components: parts
                .iter()
                .map(|c| c.binding.property_name.clone())
                .collect(),
            keys,
        }
    }
}

/// Grouped records keyed by category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveGroupStore {
    groups: BTreeMap<CurveCategory, Vec<GroupedCurve>>,
}

impl CurveGroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_curve_set(set: &CurveSet) -> Self {
        let mut store = CurveGroupStore::new();
        // (path, type, base, category) -> components, in first-appearance order
        let mut pending: Vec<((String, TargetType, String, CurveCategory), Vec<&Curve>)> =
            Vec::new();
        for curve in set.iter() {
            let key = match (curve.category, split_component(curve.property_name())) {
                (CurveCategory::Scalar, _) | (_, None) => {
                    store.push(CurveCategory::Scalar, GroupedCurve::scalar(curve));
                    continue;
                }
                (category, Some((base, _))) => (
                    curve.binding.path.clone(),
                    curve.binding.target_type,
                    base.to_string(),
                    category,
                ),
            };
            match pending.iter().position(|(k, _)| *k == key) {
                Some(i) => pending[i].1.push(curve),
                None => pending.push((key, vec![curve])),
            }
        }

        for ((path, target_type, _, category), parts) in pending {
            match ordered_components(&parts, category.arity()) {
                Some(ordered) => {
                    store.push(category, GroupedCurve::from_components(&path, target_type, &ordered))
                }
                None => {
                    for curve in parts {
                        store.push(CurveCategory::Scalar, GroupedCurve::scalar(curve));
                    }
                }
            }
        }
        store
    }

    fn push(&mut self, category: CurveCategory, curve: GroupedCurve) {
        self.groups.entry(category).or_default().push(curve);
    }

    pub fn group(&self, category: CurveCategory) -> &[GroupedCurve] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn group_mut(&mut self, category: CurveCategory) -> &mut [GroupedCurve] {
        self.groups
            .get_mut(&category)
            .map(Vec::as_mut_slice)
            .unwrap_or(&mut [])
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All records, grouped categories in `Scalar, Vector3, Vector4, Rotation` order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (CurveCategory, &mut GroupedCurve)> {
        self.groups
            .iter_mut()
            .flat_map(|(cat, curves)| curves.iter_mut().map(move |c| (*cat, c)))
    }

    /// Copy slopes back into the per-axis curves of `set`.
    pub fn write_back(&self, set: &mut CurveSet) {
        for curves in self.groups.values() {
            for record in curves {
                for c in 0..record.arity() {
                    let binding = record.component_binding(c);
                    let Some(keys) = set.keys_mut(&binding) else {
                        continue;
                    };
                    for (key, grouped) in keys.iter_mut().zip(&record.keys) {
                        key.in_slope = grouped.in_slope[c];
                        key.out_slope = grouped.out_slope[c];
                    }
                }
            }
        }
    }
}

/// Components sorted by index when the set is complete and shares key times.
fn ordered_components<'a>(parts: &[&'a Curve], arity: usize) -> Option<Vec<&'a Curve>> {
    let mut slots: Vec<Option<&'a Curve>> = vec![None; arity];
    for curve in parts {
        let (_, idx) = split_component(curve.property_name())?;
        let slot = slots.get_mut(idx)?;
        if slot.is_some() {
            return None;
        }
        *slot = Some(curve);
    }
    let ordered: Vec<&Curve> = slots.into_iter().collect::<Option<_>>()?;
    let first = ordered[0];
    let same_times = ordered.iter().all(|c| {
        c.keys.len() == first.keys.len()
            && c.keys.iter().zip(&first.keys).all(|(a, b)| a.time == b.time)
    });
    same_times.then_some(ordered)
}
