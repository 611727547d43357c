//! # Route Subcommand
//!
//! One-shot run of the full request path against an in-memory audit log:
//! register the credential, record the baseline, process the tokens, then
//! print the outcome together with every audit event the run produced.
//!
//! A rejected request (quota, contamination) is reported in the output and
//! yields exit code 1. Malformed input files or an invalid baseline are
//! errors.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tgate_audit::{AuditEvent, InMemoryEventLog};
use tgate_router::{ProcessResult, Router, RouterConfig, TanhCore};

use crate::input::read_vector;

/// Arguments for the `tgate route` subcommand.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Client credential. Only its digest is kept.
    #[arg(long)]
    pub credential: String,

    /// JSON array recorded as the tenant baseline.
    #[arg(long)]
    pub baseline: PathBuf,

    /// JSON array of raw tokens to process.
    #[arg(long)]
    pub tokens: PathBuf,

    /// Token quota for this client (default from configuration).
    #[arg(long)]
    pub quota: Option<u64>,
}

/// What happened to the request.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    Accepted { result: ProcessResult },
    Rejected { error: String },
}

/// Full report printed by `tgate route`.
#[derive(Debug, Serialize)]
pub struct RouteReport {
    pub tenant_id: String,
    pub outcome: RouteOutcome,
    pub events: Vec<AuditEvent>,
}

impl RouteReport {
    pub fn accepted(&self) -> bool {
        matches!(self.outcome, RouteOutcome::Accepted { .. })
    }
}

/// Execute the run and collect the report without printing.
pub async fn execute(args: &RouteArgs, config: RouterConfig) -> Result<RouteReport> {
    let baseline = read_vector(&args.baseline)?;
    let tokens = read_vector(&args.tokens)?;

    let log = InMemoryEventLog::new();
    let router = Router::new(Arc::new(log.clone()), Arc::new(TanhCore), config)
        .context("invalid router configuration")?;

    let tenant_id = router.register_client(args.credential.as_bytes(), args.quota);
    let key = router
        .client_key(&tenant_id)
        .with_context(|| format!("client {tenant_id} missing after registration"))?;

    router
        .set_baseline(key.as_str(), &baseline)
        .await
        .context("failed to record baseline")?;

    let outcome = match router.process_request(key.as_str(), &tokens).await {
        Ok(result) => RouteOutcome::Accepted { result },
        Err(e) => {
            tracing::warn!(tenant_id = %tenant_id, "request rejected: {e}");
            RouteOutcome::Rejected {
                error: e.to_string(),
            }
        }
    };

    Ok(RouteReport {
        tenant_id: tenant_id.to_string(),
        outcome,
        events: log.events_for(&tenant_id),
    })
}

/// Run the route command and print its report. Returns the exit code.
pub fn run_route(args: &RouteArgs, config: RouterConfig) -> Result<u8> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let report = runtime.block_on(execute(args, config))?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(if report.accepted() { 0 } else { 1 })
}
