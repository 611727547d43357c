//! # Shared Computation Core
//!
//! The router treats the shared core as a black box `transform(vector) ->
//! vector`, assumed deterministic and side-effect-free. Every tenant's
//! namespaced tokens pass through the same instance.

use async_trait::async_trait;
use thiserror::Error;

/// Failure inside the shared core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The transform could not produce a result.
    #[error("shared core transform failed: {0}")]
    Transform(String),
}

/// The shared computation core consumed by the router.
#[async_trait]
pub trait SharedCore: Send + Sync {
    /// Transform one namespaced token vector.
    async fn transform(&self, tokens: &[f64]) -> Result<Vec<f64>, CoreError>;
}

/// Euclidean norm, scaled by the largest magnitude so large finite inputs
/// do not overflow when squared.
fn l2_norm(tokens: &[f64]) -> f64 {
    let max_abs = tokens.iter().fold(0.0_f64, |m, t| m.max(t.abs()));
    if max_abs == 0.0 {
        return 0.0;
    }
    let sum: f64 = tokens.iter().map(|t| (t / max_abs).powi(2)).sum();
    max_abs * sum.sqrt()
}

/// Placeholder core: L2-normalise (never scaling up) and apply `tanh`.
///
/// `out[i] = tanh(tokens[i] / max(||tokens||, 1))`
#[derive(Debug, Clone, Copy, Default)]
pub struct TanhCore;

#[async_trait]
impl SharedCore for TanhCore {
    async fn transform(&self, tokens: &[f64]) -> Result<Vec<f64>, CoreError> {
        if let Some(pos) = tokens.iter().position(|t| !t.is_finite()) {
            return Err(CoreError::Transform(format!(
                "input token {pos} is not finite"
            )));
        }
        let scale = l2_norm(tokens).max(1.0);
        Ok(tokens.iter().map(|t| (t / scale).tanh()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn zeros_map_to_zeros() {
        let out = TanhCore.transform(&[0.0; 8]).await.unwrap();
        assert_eq!(out, vec![0.0; 8]);
    }

    #[tokio::test]
    async fn small_inputs_are_not_scaled_up() {
        let out = TanhCore.transform(&[0.5]).await.unwrap();
        assert!((out[0] - 0.5_f64.tanh()).abs() < 1e-15);
    }

    #[tokio::test]
    async fn large_inputs_are_normalised() {
        let out = TanhCore.transform(&[3.0, 4.0]).await.unwrap();
        assert!((out[0] - 0.6_f64.tanh()).abs() < 1e-15);
        assert!((out[1] - 0.8_f64.tanh()).abs() < 1e-15);
    }

    #[tokio::test]
    async fn large_finite_inputs_do_not_overflow() {
        let out = TanhCore.transform(&[1e200, 1e200]).await.unwrap();
        let expected = std::f64::consts::FRAC_1_SQRT_2.tanh();
        assert!(out.iter().all(|v| (v - expected).abs() < 1e-12), "{out:?}");
    }

    #[test]
    fn l2_norm_matches_naive_for_small_values() {
        assert_eq!(l2_norm(&[]), 0.0);
        assert_eq!(l2_norm(&[0.0, 0.0]), 0.0);
        assert!((l2_norm(&[3.0, 4.0]) - 5.0).abs() < 1e-15);
        assert!((l2_norm(&[-1.0, 2.0, -2.0]) - 3.0).abs() < 1e-15);
    }

    #[tokio::test]
    async fn non_finite_input_is_rejected() {
        let err = TanhCore.transform(&[f64::INFINITY]).await;
        assert!(matches!(err, Err(CoreError::Transform(_))));
    }
}
