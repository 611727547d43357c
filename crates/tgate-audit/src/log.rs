//! # Event Log Trait
//!
//! Abstract interface for the external append-only audit log. All backends
//! (in-memory, database, remote service) must satisfy this trait.
//!
//! ## Security Invariant
//!
//! Appends are awaited inline by the operation that produced them, so a
//! `RESULT_WITNESSED` record can never be observed before the drift check
//! that allowed it. The trait requires `Send + Sync` so one log can be shared
//! by every tenant pipe.

use async_trait::async_trait;
use serde_json::Value;
use tgate_core::{ExecutionId, TenantId};

use crate::error::AuditError;
use crate::event::EventState;

/// Append-only audit log consumed by the router.
#[async_trait]
pub trait EventLog: Send + Sync {
    /// Append one event. Payloads are opaque to the log.
    async fn append_event(
        &self,
        tenant_id: &TenantId,
        execution_id: &ExecutionId,
        state: EventState,
        payload: Value,
    ) -> Result<(), AuditError>;

    /// Payload of the most recently appended event for `tenant_id` whose
    /// execution id starts with `execution_id_prefix`, if any.
    async fn get_latest(
        &self,
        tenant_id: &TenantId,
        execution_id_prefix: &str,
    ) -> Result<Option<Value>, AuditError>;
}
