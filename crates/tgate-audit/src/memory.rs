//! # In-Memory Event Log
//!
//! Process-local `EventLog` backend. Events live in a single append-only
//! vector behind a `parking_lot::RwLock`; the lock is never held across an
//! `.await`, and `parking_lot` locks do not poison, so a panicking reader
//! cannot wedge the log for other tenants.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::Value;
use tgate_core::{ExecutionId, TenantId};

use crate::error::AuditError;
use crate::event::{AuditEvent, EventState};
use crate::log::EventLog;

/// Thread-safe, cloneable in-memory event log.
///
/// Clones share the same underlying event list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventLog {
    events: Arc<RwLock<Vec<AuditEvent>>>,
}

impl InMemoryEventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event in append order.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.read().clone()
    }

    /// Snapshot of one tenant's events in append order.
    pub fn events_for(&self, tenant_id: &TenantId) -> Vec<AuditEvent> {
        self.events
            .read()
            .iter()
            .filter(|e| &e.tenant_id == tenant_id)
            .cloned()
            .collect()
    }

    /// Number of events in the given state, across all tenants.
    pub fn count_state(&self, state: EventState) -> usize {
        self.events.read().iter().filter(|e| e.state == state).count()
    }

    /// Total number of events.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

#[async_trait]
impl EventLog for InMemoryEventLog {
    async fn append_event(
        &self,
        tenant_id: &TenantId,
        execution_id: &ExecutionId,
        state: EventState,
        payload: Value,
    ) -> Result<(), AuditError> {
        self.events.write().push(AuditEvent {
            tenant_id: tenant_id.clone(),
            execution_id: execution_id.clone(),
            state,
            payload,
            recorded_at: Utc::now(),
        });
        Ok(())
    }

    async fn get_latest(
        &self,
        tenant_id: &TenantId,
        execution_id_prefix: &str,
    ) -> Result<Option<Value>, AuditError> {
        Ok(self
            .events
            .read()
            .iter()
            .rev()
            .find(|e| {
                &e.tenant_id == tenant_id && e.execution_id.as_str().starts_with(execution_id_prefix)
            })
            .map(|e| e.payload.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tenant(s: &str) -> TenantId {
        TenantId::new(s)
    }

    #[tokio::test]
    async fn test_get_latest_returns_most_recent_match() {
        let log = InMemoryEventLog::new();
        let t = tenant("client-a");
        let baseline = ExecutionId::baseline();
        log.append_event(&t, &baseline, EventState::BaselineSet, json!({"embedding": [1.0]}))
            .await
            .unwrap();
        log.append_event(&t, &baseline, EventState::BaselineSet, json!({"embedding": [2.0]}))
            .await
            .unwrap();

        let latest = log.get_latest(&t, "baseline").await.unwrap();
        assert_eq!(latest, Some(json!({"embedding": [2.0]})));
    }

    #[tokio::test]
    async fn test_get_latest_is_tenant_scoped() {
        let log = InMemoryEventLog::new();
        log.append_event(
            &tenant("client-a"),
            &ExecutionId::baseline(),
            EventState::BaselineSet,
            json!({"embedding": [1.0]}),
        )
        .await
        .unwrap();

        assert_eq!(log.get_latest(&tenant("client-b"), "baseline").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_latest_matches_prefix_only() {
        let log = InMemoryEventLog::new();
        let t = tenant("client-a");
        log.append_event(
            &t,
            &ExecutionId::generate("ingress"),
            EventState::TokenIngress,
            json!({"token_count": 1}),
        )
        .await
        .unwrap();

        assert_eq!(log.get_latest(&t, "baseline").await.unwrap(), None);
        assert!(log.get_latest(&t, "ingress-").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_inspection_helpers() {
        let log = InMemoryEventLog::new();
        assert!(log.is_empty());
        let shared = log.clone();
        shared
            .append_event(
                &tenant("client-a"),
                &ExecutionId::generate("witness"),
                EventState::ResultWitnessed,
                json!({}),
            )
            .await
            .unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(log.count_state(EventState::ResultWitnessed), 1);
        assert_eq!(log.count_state(EventState::TokenIngress), 0);
        assert_eq!(log.events_for(&tenant("client-a")).len(), 1);
        assert!(log.events_for(&tenant("client-b")).is_empty());
        assert_eq!(log.events()[0].state, EventState::ResultWitnessed);
    }
}
