//! # Drift Gate
//!
//! CI-style gate over the KS engine:
//!
//! - PASS if `pvalue > threshold`
//! - FAIL otherwise
//!
//! The reason string is consumed by audit tooling, so its phrasing and the
//! fixed six-decimal formatting must not change:
//!
//! ```text
//! PASS: pvalue 0.954129 > threshold 0.100000
//! FAIL: pvalue 0.010041 <= threshold 0.100000
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DriftError;
use crate::ks::{ks_two_sample, KSResult};

/// Default p-value threshold.
pub const DEFAULT_PVALUE_THRESHOLD: f64 = 0.10;

/// Default metric label recorded in gate results.
pub const DEFAULT_METRIC: &str = "ks_2samp";

/// Outcome of a drift gate evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftGateResult {
    /// Whether the candidate passed.
    pub passed: bool,
    /// The p-value threshold applied.
    pub threshold: f64,
    /// Metric label supplied by the caller.
    pub metric: String,
    /// The underlying KS comparison.
    pub ks: KSResult,
    /// Human-readable verdict.
    pub reason: String,
}

fn validate_threshold(threshold: f64) -> Result<(), DriftError> {
    if threshold > 0.0 && threshold < 1.0 {
        Ok(())
    } else {
        Err(DriftError::InvalidParameter(format!(
            "pvalue threshold must be strictly between 0 and 1, got {threshold}"
        )))
    }
}

fn verdict(ks: KSResult, threshold: f64, metric_name: &str) -> DriftGateResult {
    let passed = ks.pvalue > threshold;
    let reason = if passed {
        format!("PASS: pvalue {:.6} > threshold {:.6}", ks.pvalue, threshold)
    } else {
        format!("FAIL: pvalue {:.6} <= threshold {:.6}", ks.pvalue, threshold)
    };

    DriftGateResult {
        passed,
        threshold,
        metric: metric_name.to_string(),
        ks,
        reason,
    }
}

/// Gate `candidate` against `baseline`.
///
/// # Errors
///
/// - `InvalidParameter` if `threshold` is not in the open interval `(0, 1)`.
/// - `InvalidSample` if either sample is empty or non-finite.
pub fn gate_drift(
    baseline: &[f64],
    candidate: &[f64],
    threshold: f64,
    metric_name: &str,
) -> Result<DriftGateResult, DriftError> {
    validate_threshold(threshold)?;
    let ks = ks_two_sample(baseline, candidate)?;
    Ok(verdict(ks, threshold, metric_name))
}

/// Gate `candidate` against a baseline produced on demand by `loader`.
///
/// The threshold is validated before the loader runs. A loader failure is
/// reported as `DriftError::BaselineUnavailable`.
pub fn gate_drift_with<F, E>(
    loader: F,
    candidate: &[f64],
    threshold: f64,
    metric_name: &str,
) -> Result<DriftGateResult, DriftError>
where
    F: FnOnce() -> Result<Vec<f64>, E>,
    E: std::fmt::Display,
{
    validate_threshold(threshold)?;
    let baseline = loader().map_err(|e| DriftError::BaselineUnavailable(e.to_string()))?;
    let ks = ks_two_sample(&baseline, candidate)?;
    Ok(verdict(ks, threshold, metric_name))
}
