//! Audit log error types.

use thiserror::Error;

/// Error raised by an event log backend or by payload (de)serialization.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The storage backend rejected or failed the operation.
    #[error("event log backend error: {0}")]
    Backend(String),

    /// A payload could not be encoded or decoded.
    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),
}
