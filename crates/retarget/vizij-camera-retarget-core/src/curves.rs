//! High-level curve store: one keyframe list per bound property component.
//!
//! Curves keep insertion order (serialized order is stable across passes); a binding index
//! gives O(1) lookup. Categories are reassigned whenever a sibling component is added, so
//! `rotation.x` is tagged [`CurveCategory::Rotation`] and `position.x` becomes a
//! [`CurveCategory::Vector3`] component.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::data::{Curve, CurveBinding, CurveCategory, Keyframe, TargetType};
use crate::properties::split_component;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Curve>", into = "Vec<Curve>")]
pub struct CurveSet {
    curves: Vec<Curve>,
    index: HashMap<CurveBinding, usize>,
}

impl CurveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Curve> {
        self.curves.iter()
    }

    pub fn get(&self, binding: &CurveBinding) -> Option<&Curve> {
        self.index.get(binding).map(|&i| &self.curves[i])
    }

    /// Mutable access to a curve's keys. Bindings and categories stay owned by the set.
    pub fn keys_mut(&mut self, binding: &CurveBinding) -> Option<&mut Vec<Keyframe>> {
        let i = *self.index.get(binding)?;
        Some(&mut self.curves[i].keys)
    }

    /// Insert or replace the curve bound to `binding`.
    pub fn set_curve(&mut self, binding: CurveBinding, keys: Vec<Keyframe>) {
        if let Some(&i) = self.index.get(&binding) {
            self.curves[i].keys = keys;
            return;
        }
        self.index.insert(binding.clone(), self.curves.len());
        self.curves.push(Curve::new(binding.clone(), keys));
        self.reclassify(&binding);
    }

    pub fn clear(&mut self) {
        self.curves.clear();
        self.index.clear();
    }

    /// Component curves of `base` on one object, as (component index, curve) pairs.
    pub fn components_of<'a>(
        &'a self,
        path: &'a str,
        target_type: TargetType,
        base: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Curve)> + 'a {
        self.curves.iter().filter_map(move |c| {
            if c.binding.path != path || c.binding.target_type != target_type {
                return None;
            }
            match split_component(&c.binding.property_name) {
                Some((b, idx)) if b == base => Some((idx, c)),
                _ => None,
            }
        })
    }

    /// Distinct (path, type) objects that carry at least one component of `base`,
    /// in first-appearance order.
    pub fn objects_with(&self, base: &str) -> Vec<(String, TargetType)> {
        let mut out: Vec<(String, TargetType)> = Vec::new();
        for c in &self.curves {
            let matches = matches!(split_component(&c.binding.property_name), Some((b, _)) if b == base);
            if !matches {
                continue;
            }
            let key = (c.binding.path.clone(), c.binding.target_type);
            if !out.contains(&key) {
                out.push(key);
            }
        }
        out
    }

    fn reclassify(&mut self, binding: &CurveBinding) {
        let Some((base, _)) = split_component(&binding.property_name) else {
            return;
        };
        let base = base.to_string();
        let siblings: Vec<usize> = self
            .curves
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                c.binding.path == binding.path
                    && c.binding.target_type == binding.target_type
                    && matches!(split_component(&c.binding.property_name), Some((b, _)) if b == base)
            })
            .map(|(i, _)| i)
            .collect();
        let max_component = siblings
            .iter()
            .filter_map(|&i| split_component(&self.curves[i].binding.property_name))
            .map(|(_, idx)| idx)
            .max()
            .unwrap_or(0);
        let category = CurveCategory::classify(&base, max_component);
        for i in siblings {
            self.curves[i].category = category;
        }
    }
}

impl PartialEq for CurveSet {
    fn eq(&self, other: &Self) -> bool {
        self.curves == other.curves
    }
}

impl From<Vec<Curve>> for CurveSet {
    fn from(curves: Vec<Curve>) -> Self {
        let mut set = CurveSet::new();
        for curve in curves {
            set.set_curve(curve.binding, curve.keys);
        }
        set
    }
}

impl From<CurveSet> for Vec<Curve> {
    fn from(set: CurveSet) -> Self {
        set.curves
    }
}

impl FromIterator<Curve> for CurveSet {
    fn from_iter<I: IntoIterator<Item = Curve>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> Vec<Keyframe> {
        vec![Keyframe::new(0.0, 1.0), Keyframe::new(1.0, 2.0)]
    }

    #[test]
    fn set_curve_replaces_existing_binding() {
        let mut set = CurveSet::new();
        let b = CurveBinding::transform("position.x");
        set.set_curve(b.clone(), keys());
        set.set_curve(b.clone(), vec![Keyframe::new(0.0, 5.0)]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&b).unwrap().keys, vec![Keyframe::new(0.0, 5.0)]);
    }

    #[test]
    fn categories_follow_siblings() {
        let mut set = CurveSet::new();
        set.set_curve(CurveBinding::transform("m_Color.r"), keys());
        set.set_curve(CurveBinding::transform("position.x"), keys());
        set.set_curve(CurveBinding::transform("rotation.x"), keys());
        set.set_curve(CurveBinding::transform("field of view"), keys());
        let cat = |name: &str| set.get(&CurveBinding::transform(name)).unwrap().category;
        assert_eq!(cat("m_Color.r"), CurveCategory::Vector3);
        assert_eq!(cat("position.x"), CurveCategory::Vector3);
        assert_eq!(cat("rotation.x"), CurveCategory::Rotation);
        assert_eq!(cat("field of view"), CurveCategory::Scalar);

        set.set_curve(CurveBinding::transform("m_Color.a"), keys());
        let cat = |name: &str| set.get(&CurveBinding::transform(name)).unwrap().category;
        assert_eq!(cat("m_Color.r"), CurveCategory::Vector4);
        assert_eq!(cat("m_Color.a"), CurveCategory::Vector4);
    }

    #[test]
    fn json_round_trip_rebuilds_index_and_categories() {
        let mut set = CurveSet::new();
        set.set_curve(CurveBinding::transform("rotation.w"), keys());
        let json = serde_json::to_string(&set).unwrap();
        let back: CurveSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
        let curve = back.get(&CurveBinding::transform("rotation.w")).unwrap();
        assert_eq!(curve.category, CurveCategory::Rotation);
    }
}
