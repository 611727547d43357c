//! # Content Digest
//!
//! SHA-256 digests over canonical vector bytes and over identifier strings.
//!
//! ## Security Invariant
//!
//! Vector digests can only be computed from `VectorBytes`, so every digest
//! over numeric data uses the same byte layout. This is enforced by the
//! signature of `sha256_digest()`.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::vector::VectorBytes;

/// A 32-byte SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Wrap a raw 32-byte digest.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex_lower(&self.bytes)
    }

    /// Render the first `len` hex characters of the digest.
    ///
    /// `len` is clamped to the full 64-character rendering.
    pub fn short_hex(&self, len: usize) -> String {
        let mut hex = self.to_hex();
        hex.truncate(len.min(64));
        hex
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

fn digest_bytes(data: &[u8]) -> ContentDigest {
    let hash = Sha256::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    ContentDigest::new(bytes)
}

/// Compute a SHA-256 content digest from canonical vector bytes.
pub fn sha256_digest(data: &VectorBytes) -> ContentDigest {
    digest_bytes(data.as_bytes())
}

/// Compute a SHA-256 digest over the UTF-8 bytes of a string.
///
/// Used for identifier derivation (tenant projection seeds), never for
/// numeric payloads.
pub fn sha256_str_digest(s: &str) -> ContentDigest {
    digest_bytes(s.as_bytes())
}

/// Lowercase hex rendering of arbitrary bytes.
pub fn hex_lower(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
