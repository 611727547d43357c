//! # Client Context
//!
//! The per-client isolation boundary: who the tenant is, what it may spend,
//! and which namespace its inputs are projected into. Immutable once built;
//! owned by exactly one `TenantPipe`.

use serde::{Deserialize, Serialize};
use tgate_core::{CredentialFingerprint, NamespaceId, TenantId};
use tgate_crypto::derive_identity;

/// Immutable identity and quota of one registered client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientContext {
    /// Stable tenant identifier.
    pub tenant_id: TenantId,
    /// Truncated credential digest; the router's client key.
    pub credential_fingerprint: CredentialFingerprint,
    /// Maximum tokens this client may submit over the pipe's lifetime.
    pub token_quota: u64,
    /// Embedding namespace label.
    pub namespace_id: NamespaceId,
}

impl ClientContext {
    /// Build the context for a raw credential.
    pub fn from_credential(credential: &[u8], token_quota: u64) -> Self {
        let identity = derive_identity(credential);
        Self {
            tenant_id: identity.tenant_id,
            credential_fingerprint: identity.fingerprint,
            token_quota,
            namespace_id: identity.namespace_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_stable_for_same_credential() {
        let a = ClientContext::from_credential(b"openai-key", 10);
        let b = ClientContext::from_credential(b"openai-key", 10);
        assert_eq!(a, b);
    }

    #[test]
    fn context_never_serializes_raw_credential() {
        let ctx = ClientContext::from_credential(b"super-secret-credential", 10);
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(!json.contains("super-secret-credential"));
        assert!(json.contains(ctx.tenant_id.as_str()));
    }
}
