//! Interpolation helpers:
//! - hermite (cubic Hermite segment in unit parameter space)
//! - linear_tangent (chord slope between two keys, zero for degenerate spans)
//! - distance / polyline_length / length_ratio over sampled (time, value) points

// Hermite spline basis functions
#[inline]
fn hermite_h00(s: f64) -> f64 {
    2.0 * s.powi(3) - 3.0 * s.powi(2) + 1.0
}
#[inline]
fn hermite_h10(s: f64) -> f64 {
    s.powi(3) - 2.0 * s.powi(2) + s
}
#[inline]
fn hermite_h01(s: f64) -> f64 {
    -2.0 * s.powi(3) + 3.0 * s.powi(2)
}
#[inline]
fn hermite_h11(s: f64) -> f64 {
    s.powi(3) - s.powi(2)
}

/// Point on a cubic Hermite segment at `s` in [0, 1].
///
/// `m0`/`m1` are the endpoint tangents already scaled to the segment's parameter span
/// (slope * duration).
#[inline]
pub fn hermite(p0: f64, p1: f64, m0: f64, m1: f64, s: f64) -> f64 {
    p0 * hermite_h00(s) + m0 * hermite_h10(s) + p1 * hermite_h01(s) + m1 * hermite_h11(s)
}

/// Slope of the straight line from (time1, val1) to (time2, val2).
///
/// Returns 0 when the keys share a time.
#[inline]
pub fn linear_tangent(val1: f64, time1: f64, val2: f64, time2: f64) -> f64 {
    let dt = time2 - time1;
    if dt.abs() < f64::EPSILON {
        return 0.0;
    }
    (val2 - val1) / dt
}

/// Euclidean distance between two (time, value) points.
#[inline]
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.0 - a.0).hypot(b.1 - a.1)
}

/// Sum of the distances between consecutive points.
pub fn polyline_length(points: &[(f64, f64)]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Ratio of the sampled path length to the chord between the first and last point.
///
/// `None` when fewer than two points are given or the chord is (near) zero length.
pub fn length_ratio(points: &[(f64, f64)]) -> Option<f64> {
    let (first, last) = (points.first()?, points.last()?);
    if points.len() < 2 {
        return None;
    }
    let chord = distance(*first, *last);
    if chord < f64::EPSILON {
        return None;
    }
    Some(polyline_length(points) / chord)
}
