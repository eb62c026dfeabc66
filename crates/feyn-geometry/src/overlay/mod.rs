//! Overlay generators: periodic patterns displaced along a base curve.
//!
//! Every particle style shares the same pipeline: sample the base curve,
//! attach per-sample unit normals and cumulative arc lengths, then displace
//! laterally (or, for the helix, sweep a rotating point). [`BasePath`]
//! carries that shared per-sample data, built once per synthesis call.

mod fermion;
mod helix;
mod wave;
mod zigzag;

pub use fermion::synthesize_fermion;
pub use helix::{synthesize_helix, truncate_to_radius, HelixParams, HelixPath};
pub use wave::{synthesize_wave, WaveParams};
pub use zigzag::{synthesize_zigzag, ZigzagParams};

use feyn_core::Result;
use feyn_math::arc::cumulative_lengths;
use feyn_math::{Point2, Vector2};

use crate::curve::{BezierSpec, CubicBezier, LoopEllipse, LoopSpec};
use crate::tessellate::{
    curve_to_polyline, loop_to_polyline, unit_normals, unit_tangents_along, unit_tangents_at,
};

/// A sampled base curve with the per-sample data every overlay needs.
#[derive(Debug, Clone)]
pub struct BasePath {
    points: Vec<Point2>,
    normals: Vec<Vector2>,
    arc_lengths: Vec<f64>,
    closed: bool,
}

impl BasePath {
    /// Open base path: Bezier samples with analytic tangents evaluated at
    /// the same parameter values.
    pub fn from_bezier(spec: &BezierSpec) -> Result<Self> {
        let curve = CubicBezier::from_spec(spec)?;
        let points = curve_to_polyline(&curve, spec.sample_count);
        let tangents = unit_tangents_at(&curve, spec.sample_count);
        let arc_lengths = cumulative_lengths(&points);
        Ok(Self {
            normals: unit_normals(&tangents),
            points,
            arc_lengths,
            closed: false,
        })
    }

    /// Closed base path: arc-length-uniform loop samples with
    /// finite-difference tangents.
    pub fn from_loop(spec: &LoopSpec) -> Result<Self> {
        let ellipse = LoopEllipse::from_spec(spec)?;
        let points = loop_to_polyline(&ellipse, spec.sample_count);
        let tangents = unit_tangents_along(&points);
        let arc_lengths = cumulative_lengths(&points);
        Ok(Self {
            normals: unit_normals(&tangents),
            points,
            arc_lengths,
            closed: true,
        })
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn normals(&self) -> &[Vector2] {
        &self.normals
    }

    pub fn arc_lengths(&self) -> &[f64] {
        &self.arc_lengths
    }

    /// Total arc length of the sampled path.
    pub fn total_length(&self) -> f64 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Base point plus a lateral offset along the per-sample normal, where
    /// the offset is a function of cumulative arc length.
    fn displaced_by(&self, displacement: impl Fn(f64) -> f64) -> Vec<Point2> {
        self.points
            .iter()
            .zip(&self.normals)
            .zip(&self.arc_lengths)
            .map(|((&p, &n), &s)| p + n * displacement(s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Endpoint;
    use feyn_math::dvec2;

    // Interior-pointing tangents keep the sampled path on the x axis with
    // nonzero tangents at both ends.
    pub(crate) fn straight_spec(length: f64, samples: usize) -> BezierSpec {
        BezierSpec::new(
            Endpoint::new(dvec2(0.0, 0.0), 0.0),
            Endpoint::new(dvec2(length, 0.0), 180.0),
            0.3,
        )
        .with_sample_count(samples)
    }

    #[test]
    fn test_base_path_arrays_aligned() {
        let base = BasePath::from_bezier(&straight_spec(4.0, 100)).unwrap();
        assert_eq!(base.points().len(), 100);
        assert_eq!(base.normals().len(), 100);
        assert_eq!(base.arc_lengths().len(), 100);
        assert!(!base.is_closed());
    }

    #[test]
    fn test_straight_base_path_length() {
        let base = BasePath::from_bezier(&straight_spec(4.0, 200)).unwrap();
        assert!((base.total_length() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_straight_base_normals_point_down() {
        // Tangent +x, normal rotated -90 degrees points toward -y
        let base = BasePath::from_bezier(&straight_spec(2.0, 50)).unwrap();
        for n in base.normals() {
            assert!((*n + Vector2::Y).length() < 1e-9);
        }
    }

    #[test]
    fn test_loop_base_path_closed() {
        let spec = LoopSpec::new(dvec2(0.0, 0.0), 90.0, 2.0, 1.0).with_sample_count(300);
        let base = BasePath::from_loop(&spec).unwrap();
        assert!(base.is_closed());
        assert_eq!(base.points().len(), 300);
        let first = base.points()[0];
        let last = base.points()[299];
        assert!((first - last).length() < 1e-6);
    }

    #[test]
    fn test_displaced_by_constant_offset() {
        let base = BasePath::from_bezier(&straight_spec(2.0, 10)).unwrap();
        let displaced = base.displaced_by(|_| 0.5);
        for p in &displaced {
            assert!((p.y + 0.5).abs() < 1e-9);
        }
    }
}
