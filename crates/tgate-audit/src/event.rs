//! # Audit Events
//!
//! ## States
//!
//! | State | Written by | Execution id |
//! |---|---|---|
//! | `BASELINE_SET` | `Router::set_baseline` | `baseline` (reserved) |
//! | `TOKEN_INGRESS` | `TenantPipe::ingress` | `ingress-<uuid>` |
//! | `RESULT_WITNESSED` | `TenantPipe::egress` (pass) | `witness-<uuid>` |
//! | `CONTAMINATION_DETECTED` | `TenantPipe::egress` (fail) | `contamination-<uuid>` |
//! | `PIPE_QUARANTINED` | `TenantPipe::egress` (fail, quarantine on) | `quarantine-<uuid>` |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tgate_core::{ExecutionId, TenantId};

/// The kind of an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventState {
    /// A tenant baseline was recorded or replaced.
    BaselineSet,
    /// Namespaced tokens entered the shared core.
    TokenIngress,
    /// A result passed the drift check and was witnessed.
    ResultWitnessed,
    /// A result failed the drift check.
    ContaminationDetected,
    /// A pipe was quarantined after contamination.
    PipeQuarantined,
}

impl EventState {
    /// Returns the wire name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaselineSet => "BASELINE_SET",
            Self::TokenIngress => "TOKEN_INGRESS",
            Self::ResultWitnessed => "RESULT_WITNESSED",
            Self::ContaminationDetected => "CONTAMINATION_DETECTED",
            Self::PipeQuarantined => "PIPE_QUARANTINED",
        }
    }
}

impl std::fmt::Display for EventState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One appended audit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Tenant that owns the event.
    pub tenant_id: TenantId,
    /// Execution the event belongs to.
    pub execution_id: ExecutionId,
    /// Event kind.
    pub state: EventState,
    /// Opaque payload.
    pub payload: Value,
    /// Append time (UTC).
    pub recorded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_wire_names_match_serde() {
        for state in [
            EventState::BaselineSet,
            EventState::TokenIngress,
            EventState::ResultWitnessed,
            EventState::ContaminationDetected,
            EventState::PipeQuarantined,
        ] {
            let json = serde_json::to_value(state).unwrap();
            assert_eq!(json, Value::String(state.as_str().to_string()));
            assert_eq!(state.to_string(), state.as_str());
        }
    }
}
