//! Error types used throughout the library.

use thiserror::Error;

/// Errors raised while normalizing input data or fitting.
///
/// Conversion failures (ragged or mislabeled input) are fatal and surface
/// immediately; nothing is caught or repaired internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormFitError {
    /// Input has zero observations or zero variables.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Variable-major input whose sequences have unequal lengths.
    #[error("ragged input: {0}")]
    RaggedInput(String),

    /// Label count does not match column count.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A requested value cannot be produced.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, NormFitError>;
