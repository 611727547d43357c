//! # tgate-crypto — Cryptographic Primitives
//!
//! Provides the cryptographic building blocks for Tenant Gate:
//!
//! - **Credential fingerprinting**: SHA-256 over the raw credential,
//!   truncated to a fixed prefix, from which the tenant id and namespace id
//!   are derived deterministically.
//! - **Result witnesses**: HMAC-SHA256 over the canonical bytes of an
//!   accepted result, keyed by the tenant's credential fingerprint.
//! - **Witness verification**: constant-time recomputation for audit.
//!
//! ## Crate Policy
//!
//! - Depends only on `tgate-core` internally.
//! - The raw credential never leaves `fingerprint::derive_identity()`.
//! - No mocking of cryptographic operations in tests. All tests use real
//!   SHA-256 and real HMAC.

pub mod error;
pub mod fingerprint;
pub mod witness;

pub use error::CryptoError;
pub use fingerprint::{derive_identity, DerivedIdentity, FINGERPRINT_HEX_LEN};
pub use witness::{verify_witness, witness_hash};
