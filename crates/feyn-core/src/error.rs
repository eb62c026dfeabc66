use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeynError {
    #[error("Degenerate curve: {0}")]
    DegenerateCurve(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}

pub type Result<T> = std::result::Result<T, FeynError>;
