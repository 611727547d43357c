//! # Multi-Client Router
//!
//! Registry of tenant pipes keyed by credential fingerprint, fronting one
//! shared computation core.
//!
//! ## Request Flow
//!
//! `process_request(client_key, tokens)`:
//!
//! 1. Look up the pipe (`ClientNotFound` if absent).
//! 2. `pipe.ingress(tokens)`: quota, namespacing, `TOKEN_INGRESS`.
//! 3. `core.transform(namespaced)`.
//! 4. `pipe.egress(result)`: drift check, witness, `RESULT_WITNESSED`.
//!
//! ## Concurrency
//!
//! The registry map sits behind a `parking_lot::RwLock`. Request paths take
//! the read lock only long enough to clone the pipe's `Arc`, so requests for
//! different tenants never serialize on each other and no lock is held
//! across an `.await`.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tgate_audit::EventLog;
use tgate_core::{CredentialFingerprint, TenantId};

use crate::config::{ConfigError, RouterConfig};
use crate::context::ClientContext;
use crate::error::RouterError;
use crate::pipe::{ProcessResult, TenantPipe};
use crate::shared::{SharedCore, TanhCore};

/// Routes requests from many clients through one shared core.
pub struct Router {
    log: Arc<dyn EventLog>,
    core: Arc<dyn SharedCore>,
    config: RouterConfig,
    pipes: RwLock<HashMap<String, Arc<TenantPipe>>>,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .field("clients", &self.len())
            .finish()
    }
}

impl Router {
    /// Build a router after validating `config`.
    ///
    /// # Errors
    ///
    /// `ConfigError::OutOfRange` if the drift threshold is NaN or outside
    /// `[0, 1]`.
    pub fn new(
        log: Arc<dyn EventLog>,
        core: Arc<dyn SharedCore>,
        config: RouterConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(log, core, config))
    }

    /// Router over the placeholder `TanhCore` with default configuration.
    pub fn with_defaults(log: Arc<dyn EventLog>) -> Self {
        Self::from_valid_config(log, Arc::new(TanhCore), RouterConfig::default())
    }

    fn from_valid_config(
        log: Arc<dyn EventLog>,
        core: Arc<dyn SharedCore>,
        config: RouterConfig,
    ) -> Self {
        Self {
            log,
            core,
            config,
            pipes: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Register a client and return its tenant id.
    ///
    /// Re-registering the same credential replaces the existing pipe, which
    /// resets its token counter and clears any quarantine. Baselines live in
    /// the event log and survive re-registration.
    pub fn register_client(&self, credential: &[u8], token_quota: Option<u64>) -> TenantId {
        let quota = token_quota.unwrap_or(self.config.default_quota);
        let ctx = ClientContext::from_credential(credential, quota);
        let tenant_id = ctx.tenant_id.clone();
        let key = ctx.credential_fingerprint.as_str().to_string();

        let pipe = TenantPipe::new(ctx, Arc::clone(&self.log), self.config.drift_threshold)
            .with_quarantine(self.config.quarantine_on_contamination);
        let replaced = self.pipes.write().insert(key, Arc::new(pipe)).is_some();

        tracing::info!(
            tenant_id = %tenant_id,
            token_quota = quota,
            replaced,
            "client registered"
        );
        tenant_id
    }

    fn pipe(&self, client_key: &str) -> Result<Arc<TenantPipe>, RouterError> {
        self.pipes
            .read()
            .get(client_key)
            .cloned()
            .ok_or_else(|| RouterError::ClientNotFound(client_key.to_string()))
    }

    /// Record the baseline distribution for a registered client.
    pub async fn set_baseline(&self, client_key: &str, baseline: &[f64]) -> Result<(), RouterError> {
        let pipe = self.pipe(client_key)?;
        pipe.set_baseline(baseline).await
    }

    /// Route one request end to end.
    pub async fn process_request(
        &self,
        client_key: &str,
        raw_tokens: &[f64],
    ) -> Result<ProcessResult, RouterError> {
        let pipe = self.pipe(client_key)?;
        let namespaced = pipe.ingress(raw_tokens).await?;
        let result = self.core.transform(&namespaced).await?;
        pipe.egress(result).await
    }

    /// Client key (credential fingerprint) registered for `tenant_id`.
    pub fn client_key(&self, tenant_id: &TenantId) -> Option<CredentialFingerprint> {
        self.pipes
            .read()
            .values()
            .find(|p| &p.context().tenant_id == tenant_id)
            .map(|p| p.context().credential_fingerprint.clone())
    }

    pub fn context(&self, client_key: &str) -> Result<ClientContext, RouterError> {
        Ok(self.pipe(client_key)?.context().clone())
    }

    pub fn tokens_processed(&self, client_key: &str) -> Result<u64, RouterError> {
        Ok(self.pipe(client_key)?.tokens_processed())
    }

    pub fn is_quarantined(&self, client_key: &str) -> Result<bool, RouterError> {
        Ok(self.pipe(client_key)?.is_quarantined())
    }

    /// Number of registered clients.
    pub fn len(&self) -> usize {
        self.pipes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.read().is_empty()
    }
}
