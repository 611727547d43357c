//! # tgate-audit — Audit Log Interface
//!
//! The router records every ingress, baseline update, witness, and
//! contamination verdict through an append-only event log it does not own.
//! This crate defines that seam:
//!
//! - **`EventLog`** (`log.rs`): the two-operation trait (`append_event`,
//!   `get_latest`). Any persistence backend implementing it is substitutable.
//! - **Events** (`event.rs`): the closed set of `EventState`s and the
//!   stored `AuditEvent` record.
//! - **Payloads** (`payload.rs`): the typed payload shapes the router writes.
//!   The log itself treats payloads as opaque JSON.
//! - **`InMemoryEventLog`** (`memory.rs`): process-local backend for tests,
//!   the CLI, and single-node deployments.
//!
//! ## Crate Policy
//!
//! - Events are never mutated or deleted once appended.
//! - No lock is held across an `.await`.

pub mod error;
pub mod event;
pub mod log;
pub mod memory;
pub mod payload;

pub use error::AuditError;
pub use event::{AuditEvent, EventState};
pub use log::EventLog;
pub use memory::InMemoryEventLog;
pub use payload::{
    BaselinePayload, ContaminationPayload, IngressPayload, QuarantinePayload, WitnessPayload,
};
