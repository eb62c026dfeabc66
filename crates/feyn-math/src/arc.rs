//! Polyline arc-length utilities and radius lock-on search.

use feyn_core::{FeynError, Result};
use serde::{Deserialize, Serialize};

use crate::{Point2, Vector2};

/// Total length of a polyline: sum of consecutive Euclidean distances.
///
/// Returns 0 for an empty or single-point path.
pub fn path_length(path: &[Point2]) -> f64 {
    path.windows(2).map(|w| (w[1] - w[0]).length()).sum()
}

/// Cumulative arc length at each sample, starting at 0.
pub fn cumulative_lengths(path: &[Point2]) -> Vec<f64> {
    let mut lengths = Vec::with_capacity(path.len());
    if !path.is_empty() {
        lengths.push(0.0);
    }
    let mut total = 0.0;
    for w in path.windows(2) {
        total += (w[1] - w[0]).length();
        lengths.push(total);
    }
    lengths
}

/// A sample where the path passes closest to a circle of the given radius,
/// with the vector from that sample toward the circle center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RadiusLock {
    pub index: usize,
    pub to_center: Vector2,
}

fn check_radius_search(radius: f64, path: &[Point2]) -> Result<()> {
    if path.len() < 2 {
        return Err(FeynError::InvalidGeometry(format!(
            "radius search requires at least 2 path samples, got {}",
            path.len()
        )));
    }
    if radius <= 0.0 {
        return Err(FeynError::InvalidGeometry(format!(
            "radius must be positive, got {radius}"
        )));
    }
    Ok(())
}

fn lock_in_range(center: Point2, radius: f64, path: &[Point2], range: std::ops::Range<usize>) -> RadiusLock {
    let mut best = range.start;
    let mut best_residual = f64::INFINITY;
    for i in range {
        let residual = ((path[i] - center).length() - radius).abs();
        if residual < best_residual {
            best_residual = residual;
            best = i;
        }
    }
    RadiusLock {
        index: best,
        to_center: center - path[best],
    }
}

/// Find the sample minimizing `|dist(sample, center) - radius|` over the
/// whole path.
pub fn nearest_point_at_radius(center: Point2, radius: f64, path: &[Point2]) -> Result<RadiusLock> {
    check_radius_search(radius, path)?;
    Ok(lock_in_range(center, radius, path, 0..path.len()))
}

/// Closed-loop variant: the circle around `center` crosses the loop twice,
/// once near the start of the sampled traversal and once near its end.
///
/// The two locks are found by scanning the first and second halves of the
/// path disjointly, so the same crossing is never returned twice. The locks
/// come back ordered by sample index.
pub fn nearest_pair_at_radius(
    center: Point2,
    radius: f64,
    path: &[Point2],
) -> Result<(RadiusLock, RadiusLock)> {
    check_radius_search(radius, path)?;
    let mid = path.len() / 2;
    let entry = lock_in_range(center, radius, path, 0..mid);
    let exit = lock_in_range(center, radius, path, mid..path.len());
    Ok((entry, exit))
}

/// Re-sample a polyline at `count` points equally spaced in cumulative
/// chord length, interpolating linearly within segments.
pub fn resample_by_arc_length(path: &[Point2], count: usize) -> Vec<Point2> {
    debug_assert!(path.len() >= 2, "resampling requires at least 2 samples");
    debug_assert!(count >= 2, "resampled path must keep at least 2 samples");

    let cumulative = cumulative_lengths(path);
    let total = cumulative[path.len() - 1];

    let mut out = Vec::with_capacity(count);
    let mut seg = 0;
    for i in 0..count {
        let target = total * i as f64 / (count - 1) as f64;
        while seg + 2 < cumulative.len() && cumulative[seg + 1] < target {
            seg += 1;
        }
        let s0 = cumulative[seg];
        let s1 = cumulative[seg + 1];
        let f = if s1 > s0 { (target - s0) / (s1 - s0) } else { 0.0 };
        out.push(path[seg].lerp(path[seg + 1], f));
    }
    out
}
