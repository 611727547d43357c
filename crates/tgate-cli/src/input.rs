//! # Input Files
//!
//! JSON vector files and the optional YAML router configuration.

use std::path::Path;

use anyhow::{Context, Result};
use tgate_router::RouterConfig;

/// Read a JSON file holding a flat array of numbers.
pub fn read_vector(path: &Path) -> Result<Vec<f64>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of numbers", path.display()))
}

/// Resolve the router configuration.
///
/// A `--config` file wins; otherwise `TGATE_*` environment variables are
/// applied over the defaults.
pub fn load_config(path: Option<&Path>) -> Result<RouterConfig> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let config: RouterConfig = serde_yaml::from_str(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("invalid config {}", path.display()))?;
            config
        }
        None => RouterConfig::from_env().context("invalid TGATE_* environment")?,
    };
    tracing::debug!(?config, "router configuration resolved");
    Ok(config)
}
