//! Drift detection error types.

use thiserror::Error;

/// Error from the KS engine or the drift gate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DriftError {
    /// A sample was empty or contained a non-finite value.
    #[error("invalid sample: {0}")]
    InvalidSample(String),

    /// A numeric parameter was out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The baseline loader failed.
    #[error("baseline unavailable: {0}")]
    BaselineUnavailable(String),
}
