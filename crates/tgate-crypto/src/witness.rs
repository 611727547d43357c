//! # Result Witnesses
//!
//! A witness is an HMAC-SHA256 over the canonical bytes of an accepted
//! result, keyed by the tenant's credential fingerprint. It binds the exact
//! result bytes to the tenant that received them.
//!
//! ## Security Invariant
//!
//! - Message bytes always come from `VectorBytes`, so a witness recomputed
//!   by an auditor covers the same bytes the router hashed.
//! - Verification compares digests in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tgate_core::{hex_lower, CredentialFingerprint, VectorBytes};

use crate::error::CryptoError;

type HmacSha256 = Hmac<Sha256>;

fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<[u8; 32], CryptoError> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| CryptoError::KeyError(e.to_string()))?;
    mac.update(message);
    let tag = mac.finalize().into_bytes();
    let mut out = [0u8; 32];
    out.copy_from_slice(&tag);
    Ok(out)
}

/// Compute the lowercase-hex witness hash for a result.
pub fn witness_hash(
    fingerprint: &CredentialFingerprint,
    result: &[f64],
) -> Result<String, CryptoError> {
    let message = VectorBytes::from_f64s(result);
    let tag = hmac_sha256(fingerprint.as_bytes(), message.as_bytes())?;
    Ok(hex_lower(&tag))
}

/// Recompute the witness for `result` and compare it to `expected_hex`.
///
/// Returns `false` for any mismatch, including malformed or wrong-length
/// hex input.
pub fn verify_witness(
    fingerprint: &CredentialFingerprint,
    result: &[f64],
    expected_hex: &str,
) -> Result<bool, CryptoError> {
    let recomputed = witness_hash(fingerprint, result)?;
    let expected = expected_hex.trim().to_ascii_lowercase();
    if recomputed.len() != expected.len() {
        return Ok(false);
    }
    Ok(bool::from(recomputed.as_bytes().ct_eq(expected.as_bytes())))
}
