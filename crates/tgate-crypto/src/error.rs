//! Cryptographic error types.

use thiserror::Error;

/// Error in cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// MAC keying failed.
    #[error("key error: {0}")]
    KeyError(String),
}
