//! Router configuration.
//!
//! Defaults suit a single-node deployment. Override via environment
//! variables or explicit construction for tests and the CLI.

use serde::{Deserialize, Serialize};

/// Default per-tenant token quota.
pub const DEFAULT_TOKEN_QUOTA: u64 = 1_000_000;

/// Default maximum KS statistic accepted at egress.
pub const DEFAULT_DRIFT_THRESHOLD: f64 = 0.10;

/// Configuration shared by every pipe the router creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Quota applied when `register_client` is called without one.
    pub default_quota: u64,
    /// Maximum KS statistic between baseline and result before a result is
    /// treated as contaminated.
    pub drift_threshold: f64,
    /// Reject every later request from a pipe once it has produced a
    /// contaminated result.
    pub quarantine_on_contamination: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            default_quota: DEFAULT_TOKEN_QUOTA,
            drift_threshold: DEFAULT_DRIFT_THRESHOLD,
            quarantine_on_contamination: false,
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `TGATE_DEFAULT_QUOTA` (default: 1000000)
    /// - `TGATE_DRIFT_THRESHOLD` (default: 0.10, must lie in `[0, 1]`)
    /// - `TGATE_QUARANTINE` (`true`/`false`, default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            default_quota: env_parse("TGATE_DEFAULT_QUOTA", defaults.default_quota)?,
            drift_threshold: env_parse("TGATE_DRIFT_THRESHOLD", defaults.drift_threshold)?,
            quarantine_on_contamination: env_parse(
                "TGATE_QUARANTINE",
                defaults.quarantine_on_contamination,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.drift_threshold) {
            return Err(ConfigError::OutOfRange(
                "drift_threshold".to_string(),
                self.drift_threshold.to_string(),
            ));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(var.to_string(), raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1:?}")]
    Invalid(String, String),
    #[error("{0} out of range: {1}")]
    OutOfRange(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = RouterConfig::default();
        assert_eq!(cfg.default_quota, 1_000_000);
        assert_eq!(cfg.drift_threshold, 0.10);
        assert!(!cfg.quarantine_on_contamination);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn env_parse_uses_default_when_var_absent() {
        let v: u64 = env_parse("TGATE_NONEXISTENT_VAR_12345", 7).unwrap();
        assert_eq!(v, 7);
    }

    #[test]
    fn env_parse_rejects_malformed_value() {
        std::env::set_var("TGATE_TEST_BAD_QUOTA", "lots");
        let result: Result<u64, _> = env_parse("TGATE_TEST_BAD_QUOTA", 1);
        std::env::remove_var("TGATE_TEST_BAD_QUOTA");
        assert!(matches!(result, Err(ConfigError::Invalid(_, _))));
    }

    #[test]
    fn validate_rejects_threshold_above_one() {
        let cfg = RouterConfig {
            drift_threshold: 1.5,
            ..RouterConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::OutOfRange(_, _))));
    }

    #[test]
    fn partial_document_fills_defaults() {
        let cfg: RouterConfig = serde_json::from_str(r#"{"drift_threshold": 0.2}"#).unwrap();
        assert_eq!(cfg.drift_threshold, 0.2);
        assert_eq!(cfg.default_quota, DEFAULT_TOKEN_QUOTA);
    }
}
