//! # tgate-drift — Distribution Drift Detection
//!
//! Compares a tenant's recorded baseline against a freshly produced result
//! and decides whether the two samples plausibly come from the same
//! distribution.
//!
//! - **KS Engine** (`ks.rs`): exact two-sample Kolmogorov–Smirnov statistic
//!   and its asymptotic p-value. Pure functions, no state, no I/O.
//! - **Drift Gate** (`gate.rs`): wraps the engine with a p-value threshold
//!   and a stable, audit-parsable reason string.
//!
//! ## Numerical Contract
//!
//! The p-value series truncation (term magnitude below `1e-12`, or 200
//! terms) is fixed. Identical inputs produce identical p-values across runs
//! and across implementations that follow the same rule.

pub mod error;
pub mod gate;
pub mod ks;

pub use error::DriftError;
pub use gate::{
    gate_drift, gate_drift_with, DriftGateResult, DEFAULT_METRIC, DEFAULT_PVALUE_THRESHOLD,
};
pub use ks::{ks_pvalue_asymptotic, ks_statistic, ks_two_sample, validate_sample, KSResult};
