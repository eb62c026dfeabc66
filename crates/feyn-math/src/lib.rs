pub mod arc;

pub use glam::{dvec2, DVec2};
pub use arc::RadiusLock;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;

/// Unit vector pointing along `angle_deg`, counterclockwise from +x.
pub fn direction(angle_deg: f64) -> Vector2 {
    let rad = angle_deg.to_radians();
    Vector2::new(rad.cos(), rad.sin())
}

/// Rotate a unit tangent by -90 degrees.
///
/// All overlay generators share this convention; it determines which side
/// of the base curve a positive lateral displacement bulges toward.
pub fn right_normal(tangent: Vector2) -> Vector2 {
    Vector2::new(tangent.y, -tangent.x)
}
