use crate::error::Result;

/// Validate the numeric invariants of a path specification before synthesis.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
