//! Fermion pass-through path.

use feyn_math::Point2;

use super::BasePath;

/// A fermion line carries no periodic overlay; the smooth base curve is
/// the rendered path. Named so every particle style has one entry point.
pub fn synthesize_fermion(base: &BasePath) -> Vec<Point2> {
    base.points().to_vec()
}
