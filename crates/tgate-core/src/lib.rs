//! # tgate-core — Foundational Types for Tenant Gate
//!
//! The leaf crate of the Tenant Gate workspace. It defines the type-system
//! primitives every other crate builds on: tenant identifiers, the canonical
//! byte encoding of numeric vectors, and SHA-256 content digests.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `TenantId`, `NamespaceId`,
//!    `CredentialFingerprint`, `ExecutionId`. A namespace id can never be
//!    passed where a tenant id is expected.
//!
//! 2. **`VectorBytes` newtype.** Every hash over a numeric vector (ingress
//!    digests, result witnesses) flows through `VectorBytes::from_f64s()`,
//!    so all hashing agrees on one byte layout: little-endian IEEE-754 `f64`.
//!
//! 3. **`sha256_digest()` accepts only `&VectorBytes`.** Digests over raw
//!    vectors cannot bypass the canonical encoding.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tgate-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod identity;
pub mod vector;

// Re-export primary types for ergonomic imports.
pub use digest::{hex_lower, sha256_digest, sha256_str_digest, ContentDigest};
pub use identity::{CredentialFingerprint, ExecutionId, NamespaceId, TenantId};
pub use vector::VectorBytes;
