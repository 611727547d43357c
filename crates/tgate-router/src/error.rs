//! # Router Error Taxonomy
//!
//! Every failure is local and synchronous to the request that caused it.
//! None triggers cross-tenant state changes and none is retried internally.
//!
//! - `ClientNotFound`: unknown client key.
//! - `QuotaExceeded`: request rejected, quota counter untouched.
//! - `Contamination`: drift above threshold; terminal for the request and
//!   never downgraded to a warning. No witness exists for it.
//! - `Drift`: malformed numeric input (`InvalidSample` / `InvalidParameter`).

use tgate_audit::AuditError;
use tgate_core::TenantId;
use tgate_crypto::CryptoError;
use tgate_drift::DriftError;
use thiserror::Error;

use crate::shared::CoreError;

/// Error returned by the router and tenant pipes.
#[derive(Error, Debug)]
pub enum RouterError {
    /// No pipe is registered under the client key.
    #[error("client {0} not registered")]
    ClientNotFound(String),

    /// Admitting the request would exceed the tenant's token quota.
    #[error("client {tenant_id} exceeded quota: {attempted}>{quota}")]
    QuotaExceeded {
        /// Tenant whose quota was hit.
        tenant_id: TenantId,
        /// Total the counter would have reached.
        attempted: u64,
        /// Configured quota.
        quota: u64,
    },

    /// The result drifted too far from the tenant's baseline.
    #[error("drift {drift:.3} > threshold {threshold:.3} for tenant {tenant_id}")]
    Contamination {
        /// Tenant whose result was rejected.
        tenant_id: TenantId,
        /// Measured KS statistic.
        drift: f64,
        /// Threshold that was exceeded.
        threshold: f64,
    },

    /// The pipe was quarantined by an earlier contamination.
    #[error("pipeline for tenant {0} is quarantined")]
    Quarantined(TenantId),

    /// Malformed numeric input to the KS engine.
    #[error(transparent)]
    Drift(#[from] DriftError),

    /// The audit log failed.
    #[error(transparent)]
    Audit(#[from] AuditError),

    /// The shared core failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Witness computation failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
