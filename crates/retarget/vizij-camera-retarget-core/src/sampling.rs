//! Curve evaluation for keyframe lists with Hermite slopes.
//!
//! Model:
//! - Between two keys the curve is a cubic Hermite segment driven by the left key's
//!   out-slope and the right key's in-slope (slopes are per second, scaled by the span).
//! - A non-finite slope on either side makes the segment stepped: it holds the left value.
//! - Outside the keyed range the curve clamps to the first/last value.

use crate::data::Keyframe;
use crate::interp::functions::hermite;

/// Find the segment [i, i+1] containing `time`.
///
/// Returns `None` when `time` lies outside the keyed range or fewer than two keys exist.
fn find_segment(keys: &[Keyframe], time: f64) -> Option<(usize, usize)> {
    let n = keys.len();
    if n < 2 || time <= keys[0].time || time >= keys[n - 1].time {
        return None;
    }
    // First key strictly after `time`; always in 1..n given the bounds check above.
    let right = keys.partition_point(|k| k.time <= time);
    Some((right - 1, right))
}

/// Evaluate one Hermite segment at absolute `time`.
pub fn evaluate_segment(left: &Keyframe, right: &Keyframe, time: f64) -> f64 {
    let dt = right.time - left.time;
    if dt.abs() < f64::EPSILON {
        return left.value;
    }
    if !left.out_slope.is_finite() || !right.in_slope.is_finite() {
        return left.value;
    }
    let s = ((time - left.time) / dt).clamp(0.0, 1.0);
    hermite(
        left.value,
        right.value,
        left.out_slope * dt,
        right.in_slope * dt,
        s,
    )
}

/// Evaluate a keyframe list at `time` (seconds).
pub fn evaluate_curve(keys: &[Keyframe], time: f64) -> f64 {
    match keys {
        [] => 0.0,
        [only] => only.value,
        [first, .., last] => {
            if time <= first.time {
                return first.value;
            }
            if time >= last.time {
                return last.value;
            }
            match find_segment(keys, time) {
                Some((i0, i1)) => evaluate_segment(&keys[i0], &keys[i1], time),
                None => last.value,
            }
        }
    }
}

/// Sample `keys` at `segments + 1` evenly spaced times from `t1` to `t2` inclusive.
///
/// The last sample is taken exactly at `t2`.
pub fn sample_segment(keys: &[Keyframe], t1: f64, t2: f64, segments: usize) -> Vec<(f64, f64)> {
    let segments = segments.max(1);
    let step = (t2 - t1) / segments as f64;
    (0..=segments)
        .map(|i| {
            let t = if i == segments {
                t2
            } else {
                t1 + step * i as f64
            };
            (t, evaluate_curve(keys, t))
        })
        .collect()
}
