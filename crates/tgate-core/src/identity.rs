//! # Tenant Identity Newtypes
//!
//! Newtype wrappers for the identifiers that flow through the router.
//! These prevent accidental identifier confusion: a `NamespaceId` cannot be
//! passed where a `TenantId` is expected, and a credential fingerprint is
//! never mistaken for a tenant label in an audit record.
//!
//! ## Security Invariant
//!
//! None of these types ever holds the raw client credential. The only
//! credential-derived value is the truncated `CredentialFingerprint`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable tenant identity, e.g. `client-1a2b3c4d5e6f`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

/// Per-tenant embedding namespace label, e.g. `client_1a2b3c4d_ns`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceId(String);

/// Truncated hash of a client credential.
///
/// Doubles as the client key under which the router stores the tenant's
/// pipe, and as the HMAC key for result witnesses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialFingerprint(String);

/// Identifier of one audit-log execution (one ingress, one witness, or the
/// reserved baseline slot).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionId(String);

impl TenantId {
    /// Wrap a tenant identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl NamespaceId {
    /// Wrap a namespace identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CredentialFingerprint {
    /// Wrap a hex fingerprint string.
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Access the hex fingerprint.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The fingerprint's UTF-8 bytes, used as keying material.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl ExecutionId {
    /// Reserved execution key under which tenant baselines are recorded.
    pub const BASELINE: &'static str = "baseline";

    /// Wrap an execution identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The reserved baseline execution id.
    pub fn baseline() -> Self {
        Self(Self::BASELINE.to_string())
    }

    /// Generate a fresh execution id with the given prefix, e.g. `ingress-<uuid>`.
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{prefix}-{}", Uuid::new_v4()))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for CredentialFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
