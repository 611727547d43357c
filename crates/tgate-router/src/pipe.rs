//! # Tenant Pipe
//!
//! Per-tenant ingress and egress around the shared core. The pipe is the
//! only component with mutable state: a running token counter and, when
//! quarantine is enabled, a quarantine flag.
//!
//! ## Ingress
//!
//! 1. Quota check-and-increment as one critical section. A rejected request
//!    leaves the counter untouched.
//! 2. Namespacing with the tenant's projection vector.
//! 3. `TOKEN_INGRESS` event carrying a digest of the namespaced vector and
//!    the token count, never the raw content.
//!
//! ## Egress
//!
//! 1. Load the latest baseline (`[0.0]` if none has been recorded).
//! 2. `drift = ks_statistic(baseline, result)`.
//! 3. Unless `drift <= drift_threshold`, `Contamination`; no witness.
//! 4. Otherwise HMAC witness over the result bytes, `RESULT_WITNESSED` event.
//!
//! ## Concurrency
//!
//! The counter lives behind a `parking_lot::Mutex` that is held only for
//! the check-and-increment, never across an `.await`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tgate_audit::payload::{decode, encode};
use tgate_audit::{
    BaselinePayload, ContaminationPayload, EventLog, EventState, IngressPayload,
    QuarantinePayload, WitnessPayload,
};
use tgate_core::{sha256_digest, ExecutionId, VectorBytes};
use tgate_crypto::witness_hash;
use tgate_drift::{ks_statistic, validate_sample};

use crate::context::ClientContext;
use crate::error::RouterError;
use crate::namespace::namespace_tokens;

/// Hex characters kept from the ingress digest.
const INGRESS_HASH_HEX_LEN: usize = 16;

/// A result accepted at egress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessResult {
    /// The owning client's context.
    pub context: ClientContext,
    /// The shared core's output, unchanged.
    pub result: Vec<f64>,
    /// KS statistic against the tenant's baseline.
    pub drift: f64,
    /// HMAC-SHA256 witness over `result`.
    pub witness_hash: String,
    /// Execution id of the `RESULT_WITNESSED` event.
    pub execution_id: ExecutionId,
}

/// Per-tenant ingress/egress pipe.
pub struct TenantPipe {
    ctx: ClientContext,
    log: Arc<dyn EventLog>,
    drift_threshold: f64,
    quarantine_on_contamination: bool,
    tokens_processed: Mutex<u64>,
    quarantined: AtomicBool,
}

impl std::fmt::Debug for TenantPipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantPipe")
            .field("tenant_id", &self.ctx.tenant_id)
            .field("drift_threshold", &self.drift_threshold)
            .field("tokens_processed", &self.tokens_processed())
            .field("quarantined", &self.is_quarantined())
            .finish()
    }
}

impl TenantPipe {
    /// Create a pipe with a zeroed counter.
    ///
    /// `drift_threshold` must be a finite value in `[0, 1]`; `Router::new`
    /// checks this through `RouterConfig::validate`. A NaN threshold that
    /// slips through still rejects every result at egress.
    pub fn new(ctx: ClientContext, log: Arc<dyn EventLog>, drift_threshold: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&drift_threshold),
            "drift threshold out of range: {drift_threshold}"
        );
        Self {
            ctx,
            log,
            drift_threshold,
            quarantine_on_contamination: false,
            tokens_processed: Mutex::new(0),
            quarantined: AtomicBool::new(false),
        }
    }

    /// Quarantine the pipe on its first contaminated result.
    pub fn with_quarantine(mut self, enabled: bool) -> Self {
        self.quarantine_on_contamination = enabled;
        self
    }

    /// The client context this pipe serves.
    pub fn context(&self) -> &ClientContext {
        &self.ctx
    }

    /// Maximum KS statistic accepted at egress.
    pub fn drift_threshold(&self) -> f64 {
        self.drift_threshold
    }

    /// Tokens admitted so far.
    pub fn tokens_processed(&self) -> u64 {
        *self.tokens_processed.lock()
    }

    /// Whether an earlier contamination quarantined this pipe.
    pub fn is_quarantined(&self) -> bool {
        self.quarantined.load(Ordering::Acquire)
    }

    fn reserve_quota(&self, count: u64) -> Result<(), RouterError> {
        let mut processed = self.tokens_processed.lock();
        let projected = processed.saturating_add(count);
        if projected > self.ctx.token_quota {
            tracing::warn!(
                tenant_id = %self.ctx.tenant_id,
                attempted = projected,
                quota = self.ctx.token_quota,
                "quota exceeded"
            );
            return Err(RouterError::QuotaExceeded {
                tenant_id: self.ctx.tenant_id.clone(),
                attempted: projected,
                quota: self.ctx.token_quota,
            });
        }
        *processed = projected;
        Ok(())
    }

    /// Admit `raw_tokens` and project them into the tenant namespace.
    pub async fn ingress(&self, raw_tokens: &[f64]) -> Result<Vec<f64>, RouterError> {
        if self.is_quarantined() {
            return Err(RouterError::Quarantined(self.ctx.tenant_id.clone()));
        }

        let count = raw_tokens.len() as u64;
        self.reserve_quota(count)?;

        let namespaced = namespace_tokens(&self.ctx.tenant_id, raw_tokens);
        let embedding_hash =
            sha256_digest(&VectorBytes::from_f64s(&namespaced)).short_hex(INGRESS_HASH_HEX_LEN);

        let execution_id = ExecutionId::generate("ingress");
        self.log
            .append_event(
                &self.ctx.tenant_id,
                &execution_id,
                EventState::TokenIngress,
                encode(&IngressPayload {
                    embedding_hash,
                    token_count: count,
                })?,
            )
            .await?;

        tracing::debug!(
            tenant_id = %self.ctx.tenant_id,
            execution_id = %execution_id,
            token_count = count,
            "ingress admitted"
        );
        Ok(namespaced)
    }

    /// Record `baseline` as this tenant's reference distribution, replacing
    /// any earlier one.
    pub async fn set_baseline(&self, baseline: &[f64]) -> Result<(), RouterError> {
        validate_sample(baseline, "baseline")?;
        self.log
            .append_event(
                &self.ctx.tenant_id,
                &ExecutionId::baseline(),
                EventState::BaselineSet,
                encode(&BaselinePayload {
                    embedding: baseline.to_vec(),
                })?,
            )
            .await?;
        tracing::info!(
            tenant_id = %self.ctx.tenant_id,
            len = baseline.len(),
            "baseline recorded"
        );
        Ok(())
    }

    async fn load_baseline(&self) -> Result<Vec<f64>, RouterError> {
        let latest = self
            .log
            .get_latest(&self.ctx.tenant_id, ExecutionId::BASELINE)
            .await?;
        let baseline = match latest {
            Some(value) => decode::<BaselinePayload>(value)?.embedding,
            None => Vec::new(),
        };
        Ok(non_empty_or_zero(baseline))
    }

    /// Check `core_result` against the baseline and witness it.
    pub async fn egress(&self, core_result: Vec<f64>) -> Result<ProcessResult, RouterError> {
        let baseline = self.load_baseline().await?;
        let drift = if core_result.is_empty() {
            ks_statistic(&baseline, &[0.0])?
        } else {
            ks_statistic(&baseline, &core_result)?
        };

        // Fail closed: a NaN on either side counts as contamination.
        let within_threshold = drift <= self.drift_threshold;
        if !within_threshold {
            self.record_contamination(drift).await;
            return Err(RouterError::Contamination {
                tenant_id: self.ctx.tenant_id.clone(),
                drift,
                threshold: self.drift_threshold,
            });
        }

        let witness = witness_hash(&self.ctx.credential_fingerprint, &core_result)?;
        let execution_id = ExecutionId::generate("witness");
        self.log
            .append_event(
                &self.ctx.tenant_id,
                &execution_id,
                EventState::ResultWitnessed,
                encode(&WitnessPayload {
                    witness_hash: witness.clone(),
                    drift,
                })?,
            )
            .await?;

        tracing::debug!(
            tenant_id = %self.ctx.tenant_id,
            execution_id = %execution_id,
            drift,
            "result witnessed"
        );

        Ok(ProcessResult {
            context: self.ctx.clone(),
            result: core_result,
            drift,
            witness_hash: witness,
            execution_id,
        })
    }

    // Audit failures here are logged, not returned: the caller must see
    // `Contamination`, not an audit error that hides it.
    async fn record_contamination(&self, drift: f64) {
        tracing::warn!(
            tenant_id = %self.ctx.tenant_id,
            drift,
            threshold = self.drift_threshold,
            "contamination detected"
        );

        let detected = encode(&ContaminationPayload {
            drift,
            threshold: self.drift_threshold,
        });
        match detected {
            Ok(payload) => {
                if let Err(e) = self
                    .log
                    .append_event(
                        &self.ctx.tenant_id,
                        &ExecutionId::generate("contamination"),
                        EventState::ContaminationDetected,
                        payload,
                    )
                    .await
                {
                    tracing::error!(tenant_id = %self.ctx.tenant_id, "failed to record contamination: {e}");
                }
            }
            Err(e) => {
                tracing::error!(tenant_id = %self.ctx.tenant_id, "failed to encode contamination: {e}");
            }
        }

        if !self.quarantine_on_contamination {
            return;
        }
        self.quarantined.store(true, Ordering::Release);
        match encode(&QuarantinePayload { drift }) {
            Ok(payload) => {
                if let Err(e) = self
                    .log
                    .append_event(
                        &self.ctx.tenant_id,
                        &ExecutionId::generate("quarantine"),
                        EventState::PipeQuarantined,
                        payload,
                    )
                    .await
                {
                    tracing::error!(tenant_id = %self.ctx.tenant_id, "failed to record quarantine: {e}");
                }
            }
            Err(e) => {
                tracing::error!(tenant_id = %self.ctx.tenant_id, "failed to encode quarantine: {e}");
            }
        }
    }
}

fn non_empty_or_zero(sample: Vec<f64>) -> Vec<f64> {
    if sample.is_empty() {
        vec![0.0]
    } else {
        sample
    }
}
