//! Closed elliptical self-loop curve.

use std::f64::consts::PI;

use feyn_core::{FeynError, Result, Validate};
use feyn_math::{direction, Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::{Curve, DEFAULT_SAMPLE_COUNT};

/// Specification of a closed self-loop path.
///
/// The ellipse is anchored so that `start_point` lies on its minor axis:
/// the center sits `semi_minor` away from the start point along
/// `angular_direction_deg`, and the major axis runs perpendicular to that
/// direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopSpec {
    pub start_point: Point2,
    pub angular_direction_deg: f64,
    pub semi_major: f64,
    pub semi_minor: f64,
    pub sample_count: usize,
}

impl LoopSpec {
    pub fn new(
        start_point: Point2,
        angular_direction_deg: f64,
        semi_major: f64,
        semi_minor: f64,
    ) -> Self {
        Self {
            start_point,
            angular_direction_deg,
            semi_major,
            semi_minor,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }
}

impl Validate for LoopSpec {
    fn validate(&self) -> Result<()> {
        if self.semi_major <= 0.0 || self.semi_minor <= 0.0 {
            return Err(FeynError::InvalidGeometry(format!(
                "semi-axes must be positive, got a={}, b={}",
                self.semi_major, self.semi_minor
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

/// An ellipse traversed exactly once, parameterized from the angle of the
/// spec's start point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopEllipse {
    center: Point2,
    semi_major: f64,
    semi_minor: f64,
    major_axis_rad: f64,
    t_start: f64,
}

impl LoopEllipse {
    pub fn from_spec(spec: &LoopSpec) -> Result<Self> {
        spec.validate()?;
        let center = spec.start_point + spec.semi_minor * direction(spec.angular_direction_deg);
        let major_axis_rad = spec.angular_direction_deg.to_radians() + PI / 2.0;

        // Parameter of the start point in the axis-aligned ellipse frame
        let offset = spec.start_point - center;
        let (sin_back, cos_back) = (-major_axis_rad).sin_cos();
        let local_x = offset.x * cos_back - offset.y * sin_back;
        let local_y = offset.x * sin_back + offset.y * cos_back;
        let t_start = (local_y / spec.semi_minor).atan2(local_x / spec.semi_major);

        Ok(Self {
            center,
            semi_major: spec.semi_major,
            semi_minor: spec.semi_minor,
            major_axis_rad,
            t_start,
        })
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Orthonormal frame: unit major-axis direction and its +90° rotation.
    fn frame(&self) -> (Vector2, Vector2) {
        let u = Vector2::new(self.major_axis_rad.cos(), self.major_axis_rad.sin());
        let v = Vector2::new(-u.y, u.x);
        (u, v)
    }
}

impl Curve for LoopEllipse {
    fn point_at(&self, t: f64) -> Point2 {
        let (u, v) = self.frame();
        self.center + self.semi_major * t.cos() * u + self.semi_minor * t.sin() * v
    }

    fn tangent_at(&self, t: f64) -> Vector2 {
        let (u, v) = self.frame();
        -self.semi_major * t.sin() * u + self.semi_minor * t.cos() * v
    }

    fn domain(&self) -> (f64, f64) {
        (self.t_start, self.t_start + 2.0 * PI)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
