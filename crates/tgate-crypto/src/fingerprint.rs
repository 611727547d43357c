//! # Credential Fingerprinting
//!
//! Maps an opaque client credential to a stable tenant identity.
//!
//! ## Derivation
//!
//! With `h = hex(sha256(credential))`:
//!
//! | Field | Value |
//! |---|---|
//! | fingerprint (client key) | `h[..16]` |
//! | tenant id | `client-` + `h[..12]` |
//! | namespace id | `client_` + `h[..8]` + `_ns` |
//!
//! All three are pure functions of the credential bytes, so registering the
//! same credential twice always yields the same identity.

use sha2::{Digest, Sha256};
use tgate_core::{hex_lower, CredentialFingerprint, NamespaceId, TenantId};

/// Number of hex characters kept from the credential digest.
pub const FINGERPRINT_HEX_LEN: usize = 16;

const TENANT_HEX_LEN: usize = 12;
const NAMESPACE_HEX_LEN: usize = 8;

/// Identity derived from one client credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentity {
    /// Truncated credential digest; also the router's client key.
    pub fingerprint: CredentialFingerprint,
    /// Stable tenant identifier.
    pub tenant_id: TenantId,
    /// Embedding namespace label.
    pub namespace_id: NamespaceId,
}

/// Derive the tenant identity for a credential.
pub fn derive_identity(credential: &[u8]) -> DerivedIdentity {
    let hex = hex_lower(&Sha256::digest(credential));

    DerivedIdentity {
        fingerprint: CredentialFingerprint::new(&hex[..FINGERPRINT_HEX_LEN]),
        tenant_id: TenantId::new(format!("client-{}", &hex[..TENANT_HEX_LEN])),
        namespace_id: NamespaceId::new(format!("client_{}_ns", &hex[..NAMESPACE_HEX_LEN])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_credential_derivation() {
        // sha256("abc") = ba7816bf8f01cfea414140de5dae2223...
        let id = derive_identity(b"abc");
        assert_eq!(id.fingerprint.as_str(), "ba7816bf8f01cfea");
        assert_eq!(id.tenant_id.as_str(), "client-ba7816bf8f01");
        assert_eq!(id.namespace_id.as_str(), "client_ba7816bf_ns");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(derive_identity(b"openai-key"), derive_identity(b"openai-key"));
    }

    #[test]
    fn test_distinct_credentials_distinct_identities() {
        let a = derive_identity(b"openai-key");
        let b = derive_identity(b"anthropic-key");
        assert_ne!(a.fingerprint, b.fingerprint);
        assert_ne!(a.tenant_id, b.tenant_id);
        assert_ne!(a.namespace_id, b.namespace_id);
    }

    #[test]
    fn test_fingerprint_length() {
        let id = derive_identity(b"");
        assert_eq!(id.fingerprint.as_str().len(), FINGERPRINT_HEX_LEN);
        assert!(id.fingerprint.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }
}
