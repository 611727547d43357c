//! # Gate Subcommand
//!
//! Offline drift gate: compares a candidate vector against a baseline
//! vector and prints the `DriftGateResult` as JSON. Exit code 1 on FAIL.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tgate_drift::{gate_drift, DriftGateResult, DEFAULT_METRIC, DEFAULT_PVALUE_THRESHOLD};

use crate::input::read_vector;

/// Arguments for the `tgate gate` subcommand.
#[derive(Args, Debug)]
pub struct GateArgs {
    /// JSON array of baseline values.
    #[arg(long)]
    pub baseline: PathBuf,

    /// JSON array of candidate values.
    #[arg(long)]
    pub candidate: PathBuf,

    /// p-value threshold, strictly between 0 and 1.
    #[arg(long, default_value_t = DEFAULT_PVALUE_THRESHOLD)]
    pub threshold: f64,

    /// Metric name recorded in the result.
    #[arg(long, default_value = DEFAULT_METRIC)]
    pub metric: String,
}

/// Evaluate the gate without printing.
pub fn evaluate(args: &GateArgs) -> Result<DriftGateResult> {
    let baseline = read_vector(&args.baseline)?;
    let candidate = read_vector(&args.candidate)?;
    let result = gate_drift(&baseline, &candidate, args.threshold, &args.metric)
        .context("drift gate failed")?;
    Ok(result)
}

/// Run the gate and print its result. Returns the exit code.
pub fn run_gate(args: &GateArgs) -> Result<u8> {
    let result = evaluate(args)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    if result.passed {
        tracing::info!(reason = %result.reason, "drift gate passed");
        Ok(0)
    } else {
        tracing::warn!(reason = %result.reason, "drift gate failed");
        Ok(1)
    }
}
