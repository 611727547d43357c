//! # tgate-router — Multi-Tenant Isolation Router
//!
//! Lets many independent clients share one computation core without their
//! data or outputs bleeding into each other.
//!
//! - **Client Registry** (`router.rs`): maps credential fingerprints to
//!   tenant pipes and routes each request through ingress, the shared
//!   core, and egress.
//! - **Tenant Pipe** (`pipe.rs`): quota enforcement, namespacing, drift
//!   check at egress, and HMAC witnessing of accepted results.
//! - **Client Context** (`context.rs`): immutable per-client identity and
//!   quota derived from the credential.
//! - **Namespacing** (`namespace.rs`): deterministic per-tenant projection.
//! - **Shared Core** (`shared.rs`): the `SharedCore` seam and the `TanhCore`
//!   placeholder.
//! - **Configuration** (`config.rs`): defaults and `TGATE_*` environment
//!   overrides.
//!
//! ## Security Invariant
//!
//! No result is returned to a client unless its KS statistic against that
//! client's baseline is at or below the drift threshold, and every returned
//! result carries a witness keyed by the client's own fingerprint. Raw
//! credentials and raw token vectors never reach the audit log.
//!
//! ## Crate Policy
//!
//! - No lock is held across an `.await`.
//! - A contaminated result is always an error, never a warning.

pub mod config;
pub mod context;
pub mod error;
pub mod namespace;
pub mod pipe;
pub mod router;
pub mod shared;

pub use config::{ConfigError, RouterConfig, DEFAULT_DRIFT_THRESHOLD, DEFAULT_TOKEN_QUOTA};
pub use context::ClientContext;
pub use error::RouterError;
pub use namespace::{namespace_tokens, tenant_projection};
pub use pipe::{ProcessResult, TenantPipe};
pub use router::Router;
pub use shared::{CoreError, SharedCore, TanhCore};
