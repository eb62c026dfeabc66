//! Curve traits and implementations.

mod bezier;
mod loop_ellipse;

use feyn_math::{Point2, Vector2};

pub use bezier::{BezierSpec, CubicBezier, Endpoint};
pub use loop_ellipse::{LoopEllipse, LoopSpec};

/// Default sample count for a renderable polyline.
pub const DEFAULT_SAMPLE_COUNT: usize = 2000;

/// Trait for parametric planar curves.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;

    /// Evaluate the (non-normalized) tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector2;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}
