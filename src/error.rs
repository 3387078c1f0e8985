//! Error taxonomy of the training core
use thiserror::Error;

/// Errors reported by training and prediction routines.
#[derive(Debug, Error)]
pub enum Error {
    /// A hyperparameter is outside its valid range or the dataset is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A sample or query vector disagrees with the expected dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Length actually seen.
        found: usize,
    },
    /// The warm-start source does not match the new training problem.
    #[error("incompatible warm start: {0}")]
    IncompatibleWarmStart(String),
    /// Prediction was requested before a successful call to `train`.
    #[error("model has not been trained")]
    NotTrained,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
