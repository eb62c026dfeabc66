//! Conversion of parametric curves to dense polylines, with the tangent and
//! normal arrays the overlay generators consume.

use feyn_math::arc::resample_by_arc_length;
use feyn_math::{right_normal, Point2, Vector2};

use crate::curve::{Curve, LoopEllipse};

/// Oversampling factor for arc-length-uniform loop tessellation.
const LOOP_OVERSAMPLE: usize = 20;

/// Guard value substituted for a zero-length tangent before normalization.
const TANGENT_EPSILON: f64 = 1e-10;

/// Sample a curve at `count` uniformly spaced parameter values.
///
/// Spacing is uniform in the curve parameter, not in arc length.
pub fn curve_to_polyline(curve: &dyn Curve, count: usize) -> Vec<Point2> {
    let count = count.max(2);
    let (t_min, t_max) = curve.domain();
    (0..count)
        .map(|i| {
            let t = t_min + (t_max - t_min) * i as f64 / (count - 1) as f64;
            curve.point_at(t)
        })
        .collect()
}

/// Sample a closed loop at `count` points approximately equally spaced in
/// arc length: dense angular sampling followed by chord-length resampling.
pub fn loop_to_polyline(ellipse: &LoopEllipse, count: usize) -> Vec<Point2> {
    let count = count.max(2);
    let dense = curve_to_polyline(ellipse, count * LOOP_OVERSAMPLE);
    resample_by_arc_length(&dense, count)
}

fn normalize_guarded(v: Vector2) -> Vector2 {
    let mut len = v.length();
    if len == 0.0 {
        len = TANGENT_EPSILON;
    }
    v / len
}

/// Analytic unit tangents at `count` uniformly spaced parameter values,
/// aligned index-for-index with [`curve_to_polyline`] output.
pub fn unit_tangents_at(curve: &dyn Curve, count: usize) -> Vec<Vector2> {
    let count = count.max(2);
    let (t_min, t_max) = curve.domain();
    (0..count)
        .map(|i| {
            let t = t_min + (t_max - t_min) * i as f64 / (count - 1) as f64;
            normalize_guarded(curve.tangent_at(t))
        })
        .collect()
}

/// Finite-difference unit tangents along a sampled path.
///
/// The last sample reuses the previous segment's direction so the result
/// stays aligned with the path.
pub fn unit_tangents_along(path: &[Point2]) -> Vec<Vector2> {
    if path.len() < 2 {
        return vec![Vector2::X; path.len()];
    }
    let mut tangents: Vec<Vector2> = path
        .windows(2)
        .map(|w| normalize_guarded(w[1] - w[0]))
        .collect();
    tangents.push(tangents[tangents.len() - 1]);
    tangents
}

/// Unit normals for a tangent array: each tangent rotated -90 degrees.
pub fn unit_normals(tangents: &[Vector2]) -> Vec<Vector2> {
    tangents.iter().map(|&t| right_normal(t)).collect()
}
