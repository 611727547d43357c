//! # Event Payloads
//!
//! The shapes the router writes into the otherwise opaque payload field.
//! Raw tenant input never appears here; ingress events carry only a digest
//! of the namespaced vector and a token count.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AuditError;

/// `BASELINE_SET` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselinePayload {
    /// The full baseline sample.
    pub embedding: Vec<f64>,
}

/// `TOKEN_INGRESS` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressPayload {
    /// First 16 hex characters of SHA-256 over the namespaced vector bytes.
    pub embedding_hash: String,
    /// Number of tokens admitted.
    pub token_count: u64,
}

/// `RESULT_WITNESSED` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WitnessPayload {
    /// HMAC-SHA256 witness, lowercase hex.
    pub witness_hash: String,
    /// KS statistic measured against the baseline.
    pub drift: f64,
}

/// `CONTAMINATION_DETECTED` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContaminationPayload {
    /// KS statistic measured against the baseline.
    pub drift: f64,
    /// Threshold that was exceeded.
    pub threshold: f64,
}

/// `PIPE_QUARANTINED` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarantinePayload {
    /// Drift that triggered the quarantine.
    pub drift: f64,
}

/// Encode a typed payload as an opaque JSON value.
pub fn encode<T: Serialize>(payload: &T) -> Result<Value, AuditError> {
    Ok(serde_json::to_value(payload)?)
}

/// Decode an opaque JSON value into a typed payload.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, AuditError> {
    Ok(serde_json::from_value(value)?)
}
