//! # Canonical Vector Bytes
//!
//! Defines `VectorBytes`, the sole construction path for bytes hashed over
//! numeric vectors anywhere in Tenant Gate.
//!
//! ## Security Invariant
//!
//! The inner buffer is private. The only constructor encodes each element as
//! a little-endian IEEE-754 `f64`, back to back, with no header or length
//! prefix. Ingress digests and result witnesses computed by different
//! components therefore always agree on the bytes they cover.

/// Little-endian `f64` encoding of a numeric vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VectorBytes(Vec<u8>);

impl VectorBytes {
    /// Encode a slice of `f64` values.
    pub fn from_f64s(values: &[f64]) -> Self {
        let mut bytes = Vec::with_capacity(values.len() * 8);
        for v in values {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        Self(bytes)
    }

    /// Access the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the encoded byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the encoded vector was empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for VectorBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
