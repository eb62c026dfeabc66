//! FeynPath geometry: base curves, phase matching, and particle-line
//! overlays.

pub mod curve;
pub mod overlay;
pub mod phase;
pub mod style;
pub mod tessellate;

pub use curve::Curve;
pub use overlay::BasePath;
pub use phase::BoundaryPhase;
pub use style::{synthesize, BaseSpec, GeneratedPath, LineStyle};
