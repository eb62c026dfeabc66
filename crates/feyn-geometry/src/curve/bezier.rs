//! Cubic Bezier base curve with boundary tangent angles.

use feyn_core::{FeynError, Result, Tolerance, Validate};
use feyn_math::{direction, Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::{Curve, DEFAULT_SAMPLE_COUNT};

/// One end of an open particle line: a position plus the tangent angle
/// (degrees, counterclockwise from +x) along which the control point is
/// offset from it.
///
/// The angle points into the line's interior at both ends. A data model
/// derives the end-vertex default as `atan2(start - end)`, not
/// `atan2(end - start)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Endpoint {
    pub position: Point2,
    pub tangent_angle_deg: f64,
}

impl Endpoint {
    pub fn new(position: Point2, tangent_angle_deg: f64) -> Self {
        Self {
            position,
            tangent_angle_deg,
        }
    }
}

/// Specification of an open base curve.
///
/// `offset_ratio` scales the control-point distance from each endpoint
/// relative to the straight-line distance between the endpoints. Curve
/// sampling and tangent evaluation both derive from this one stored value;
/// there is no separately-passed ratio to get out of sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierSpec {
    pub start: Endpoint,
    pub end: Endpoint,
    pub offset_ratio: f64,
    pub sample_count: usize,
}

impl BezierSpec {
    /// Typical control-point offset for a gently bowed line.
    pub const DEFAULT_OFFSET_RATIO: f64 = 0.3;

    pub fn new(start: Endpoint, end: Endpoint, offset_ratio: f64) -> Self {
        Self {
            start,
            end,
            offset_ratio,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Straight-line distance between the endpoints.
    pub fn chord_length(&self) -> f64 {
        (self.end.position - self.start.position).length()
    }
}

impl Validate for BezierSpec {
    fn validate(&self) -> Result<()> {
        let tol = Tolerance::default_precision();
        if tol.is_zero(self.chord_length()) {
            return Err(FeynError::DegenerateCurve(format!(
                "endpoints coincide at ({}, {})",
                self.start.position.x, self.start.position.y
            )));
        }
        if self.sample_count < 2 {
            return Err(FeynError::InvalidGeometry(format!(
                "sample_count must be at least 2, got {}",
                self.sample_count
            )));
        }
        Ok(())
    }
}

/// A cubic Bezier parameterized over `[0, 1]`, built from a [`BezierSpec`].
///
/// The control points sit `offset_ratio * chord_length` away from each
/// endpoint along that endpoint's tangent angle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubicBezier {
    p0: Point2,
    c1: Point2,
    c2: Point2,
    p3: Point2,
}

impl CubicBezier {
    pub fn from_spec(spec: &BezierSpec) -> Result<Self> {
        spec.validate()?;
        let p0 = spec.start.position;
        let p3 = spec.end.position;
        let reach = spec.offset_ratio * spec.chord_length();
        let c1 = p0 + reach * direction(spec.start.tangent_angle_deg);
        let c2 = p3 + reach * direction(spec.end.tangent_angle_deg);
        Ok(Self { p0, c1, c2, p3 })
    }

    pub fn control_points(&self) -> [Point2; 4] {
        [self.p0, self.c1, self.c2, self.p3]
    }
}

impl Curve for CubicBezier {
    fn point_at(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        u * u * u * self.p0
            + 3.0 * u * u * t * self.c1
            + 3.0 * u * t * t * self.c2
            + t * t * t * self.p3
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        let u = 1.0 - t;
        3.0 * u * u * (self.c1 - self.p0)
            + 6.0 * u * t * (self.c2 - self.c1)
            + 3.0 * t * t * (self.p3 - self.c2)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
