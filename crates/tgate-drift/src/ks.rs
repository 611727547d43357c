//! # Two-Sample Kolmogorov–Smirnov Engine
//!
//! `D = sup_v |F_x(v) - F_y(v)|` evaluated exactly at every observed value,
//! followed by the asymptotic Kolmogorov distribution tail
//!
//! ```text
//! en     = sqrt(n1 * n2 / (n1 + n2))
//! lambda = (en + 0.12 + 0.11 / en) * D
//! Q(l)   = 2 * sum_{j>=1} (-1)^(j-1) * exp(-2 j^2 l^2)
//! ```
//!
//! No binning and no randomness: fixed inputs give a fixed result.

use serde::{Deserialize, Serialize};

use crate::error::DriftError;

/// Series terms with magnitude below this stop the p-value summation.
const SERIES_EPSILON: f64 = 1e-12;

/// Hard cap on p-value series terms.
const SERIES_MAX_TERMS: u32 = 200;

/// Outcome of one two-sample KS comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KSResult {
    /// The KS statistic `D`, in `[0, 1]`.
    pub statistic: f64,
    /// Asymptotic p-value, in `[0, 1]`.
    pub pvalue: f64,
    /// Size of the first sample.
    pub n1: usize,
    /// Size of the second sample.
    pub n2: usize,
}

/// Check that `sample` is non-empty and all-finite.
///
/// `label` names the sample in the error message.
pub fn validate_sample(sample: &[f64], label: &str) -> Result<(), DriftError> {
    if sample.is_empty() {
        return Err(DriftError::InvalidSample(format!(
            "KS test requires non-empty samples ({label} is empty)"
        )));
    }
    if let Some(pos) = sample.iter().position(|v| !v.is_finite()) {
        return Err(DriftError::InvalidSample(format!(
            "KS test requires all-finite samples ({label}[{pos}] = {})",
            sample[pos]
        )));
    }
    Ok(())
}

fn sorted(sample: &[f64]) -> Vec<f64> {
    let mut out = sample.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

/// Empirical CDF of a sorted sample at `v`: the right insertion point of `v`
/// divided by the sample size.
fn ecdf(sorted_sample: &[f64], v: f64) -> f64 {
    sorted_sample.partition_point(|&e| e <= v) as f64 / sorted_sample.len() as f64
}

/// Two-sample KS statistic `D`.
///
/// # Errors
///
/// `DriftError::InvalidSample` if either sample is empty or contains NaN
/// or an infinity.
pub fn ks_statistic(x: &[f64], y: &[f64]) -> Result<f64, DriftError> {
    validate_sample(x, "x")?;
    validate_sample(y, "y")?;

    let xs = sorted(x);
    let ys = sorted(y);

    // The supremum is attained at an observed value; ties across samples are
    // resolved by evaluating both CDFs at the same point.
    let d = xs
        .iter()
        .chain(ys.iter())
        .map(|&v| (ecdf(&xs, v) - ecdf(&ys, v)).abs())
        .fold(0.0_f64, f64::max);

    Ok(d)
}

/// Asymptotic two-sample KS p-value for statistic `d` and sample sizes
/// `n1`, `n2`.
///
/// # Errors
///
/// `DriftError::InvalidParameter` if `d` is outside `[0, 1]` or either
/// sample size is zero.
pub fn ks_pvalue_asymptotic(d: f64, n1: usize, n2: usize) -> Result<f64, DriftError> {
    if !(0.0..=1.0).contains(&d) {
        return Err(DriftError::InvalidParameter(format!(
            "KS statistic d must be in [0,1], got {d}"
        )));
    }
    if n1 == 0 || n2 == 0 {
        return Err(DriftError::InvalidParameter(format!(
            "sample sizes must be positive, got n1={n1} n2={n2}"
        )));
    }

    let (n1, n2) = (n1 as f64, n2 as f64);
    let en = (n1 * n2 / (n1 + n2)).sqrt();
    if en == 0.0 {
        return Ok(1.0);
    }

    let lambda = (en + 0.12 + 0.11 / en) * d;
    if lambda <= 0.0 {
        return Ok(1.0);
    }

    let mut sum = 0.0_f64;
    for j in 1..=SERIES_MAX_TERMS {
        let sign = if j % 2 == 1 { 1.0 } else { -1.0 };
        let jf = f64::from(j);
        let term = sign * (-2.0 * (jf * jf) * (lambda * lambda)).exp();
        sum += term;
        if term.abs() < SERIES_EPSILON {
            break;
        }
    }

    Ok((2.0 * sum).clamp(0.0, 1.0))
}

/// Run the full two-sample KS test.
///
/// `n1` and `n2` in the result are the sizes of `x` and `y` as given.
pub fn ks_two_sample(x: &[f64], y: &[f64]) -> Result<KSResult, DriftError> {
    let statistic = ks_statistic(x, y)?;
    let pvalue = ks_pvalue_asymptotic(statistic, x.len(), y.len())?;
    Ok(KSResult {
        statistic,
        pvalue,
        n1: x.len(),
        n2: y.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifted_five_point_sample() {
        let baseline = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let current: Vec<f64> = baseline.iter().map(|v| v + 0.25).collect();
        let d = ks_statistic(&baseline, &current).unwrap();
        assert!((d - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_identical_samples_have_zero_statistic() {
        let x = [3.0, 1.0, 2.0, 2.0];
        assert_eq!(ks_statistic(&x, &x).unwrap(), 0.0);
    }

    #[test]
    fn test_disjoint_samples_have_unit_statistic() {
        assert_eq!(ks_statistic(&[0.0; 64], &[1.0; 64]).unwrap(), 1.0);
    }

    #[test]
    fn test_ties_across_samples() {
        // F_x(1) = 1/2, F_y(1) = 1; F_x(2) = 1, F_y(2) = 1.
        let d = ks_statistic(&[1.0, 2.0], &[1.0]).unwrap();
        assert!((d - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_unequal_sizes() {
        let d = ks_statistic(&[0.0], &[0.0, 0.0, 0.0, 10.0]).unwrap();
        assert!((d - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_empty_sample_rejected() {
        assert!(matches!(
            ks_statistic(&[], &[1.0]),
            Err(DriftError::InvalidSample(_))
        ));
        assert!(matches!(
            ks_statistic(&[1.0], &[]),
            Err(DriftError::InvalidSample(_))
        ));
    }

    #[test]
    fn test_non_finite_sample_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                ks_statistic(&[0.0, bad], &[1.0]),
                Err(DriftError::InvalidSample(_))
            ));
        }
    }

    #[test]
    fn test_pvalue_zero_statistic_is_one() {
        assert_eq!(ks_pvalue_asymptotic(0.0, 10, 10).unwrap(), 1.0);
    }

    #[test]
    fn test_pvalue_decreases_with_statistic() {
        let p_small = ks_pvalue_asymptotic(0.1, 50, 50).unwrap();
        let p_large = ks_pvalue_asymptotic(0.5, 50, 50).unwrap();
        assert!(p_small > p_large);
    }

    #[test]
    fn test_pvalue_tiny_statistic_hits_term_cap() {
        // lambda ~ 0.0024: no term falls below the epsilon, so the sum stops
        // after exactly 200 terms.
        let p = ks_pvalue_asymptotic(1e-3, 10, 10).unwrap();
        assert!((p - 0.37195246604006016).abs() < 1e-9);
    }

    #[test]
    fn test_pvalue_known_values() {
        let p = ks_pvalue_asymptotic(0.2, 10, 10).unwrap();
        assert!((p - 0.9747892465409951).abs() < 1e-12);
        let p = ks_pvalue_asymptotic(0.5, 50, 50).unwrap();
        assert!((p - 3.6276162006545173e-06).abs() < 1e-15);
    }

    #[test]
    fn test_pvalue_maximal_drift_is_near_zero() {
        let p = ks_pvalue_asymptotic(1.0, 64, 64).unwrap();
        assert!(p >= 0.0);
        assert!(p < 1e-20);
    }

    #[test]
    fn test_pvalue_rejects_out_of_range_statistic() {
        for d in [-0.01, 1.01, f64::NAN] {
            assert!(matches!(
                ks_pvalue_asymptotic(d, 5, 5),
                Err(DriftError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_pvalue_rejects_zero_sample_size() {
        assert!(matches!(
            ks_pvalue_asymptotic(0.5, 0, 5),
            Err(DriftError::InvalidParameter(_))
        ));
        assert!(matches!(
            ks_pvalue_asymptotic(0.5, 5, 0),
            Err(DriftError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_two_sample_reports_input_sizes() {
        let r = ks_two_sample(&[3.0, 1.0, 2.0], &[1.5, 2.5]).unwrap();
        assert_eq!(r.n1, 3);
        assert_eq!(r.n2, 2);
        assert!((0.0..=1.0).contains(&r.statistic));
        assert!((0.0..=1.0).contains(&r.pvalue));
    }
}
