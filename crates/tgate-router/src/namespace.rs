//! # Tenant Namespacing
//!
//! Every tenant's input is multiplied elementwise by a projection vector
//! unique to that tenant, so output that bleeds across tenants carries the
//! wrong tenant's scaling and shows up as distributional drift.
//!
//! ## Determinism
//!
//! The projection is a pure function of `(tenant_id, length)`: a
//! Xoshiro256++ generator seeded from the first four bytes of
//! `sha256(tenant_id)`, drawing uniformly from `[0.95, 1.05)`. Values are
//! reproducible within this implementation only; they are not a
//! cross-language contract.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tgate_core::{sha256_str_digest, TenantId};

/// Lower bound of projection factors (inclusive).
pub const PROJECTION_LOW: f64 = 0.95;

/// Upper bound of projection factors (exclusive).
pub const PROJECTION_HIGH: f64 = 1.05;

fn projection_seed(tenant_id: &TenantId) -> u64 {
    let digest = sha256_str_digest(tenant_id.as_str());
    let [a, b, c, d, ..] = digest.bytes;
    u64::from(u32::from_be_bytes([a, b, c, d]))
}

/// The tenant's projection vector of the given length.
pub fn tenant_projection(tenant_id: &TenantId, len: usize) -> Vec<f64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(projection_seed(tenant_id));
    (0..len)
        .map(|_| rng.gen_range(PROJECTION_LOW..PROJECTION_HIGH))
        .collect()
}

/// Project `tokens` into the tenant's namespace.
pub fn namespace_tokens(tenant_id: &TenantId, tokens: &[f64]) -> Vec<f64> {
    tenant_projection(tenant_id, tokens.len())
        .into_iter()
        .zip(tokens)
        .map(|(p, t)| p * t)
        .collect()
}
