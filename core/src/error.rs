use thiserror::Error;

// Rejections raised by the validating construction path in `params`.
// The raw queries on `Noise2D` never fail.
#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum Noise2DError {
    #[error("seed must be a finite number, got {0}")]
    NonFiniteSeed(f64),
    // zero would divide the sample coordinates
    #[error("scale must be finite and nonzero, got {0}")]
    InvalidScale(f64),
    #[error("range must be a finite number, got {0}")]
    NonFiniteRange(f64),
}
