//! # tgate CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tgate_cli::gate::{run_gate, GateArgs};
use tgate_cli::input::load_config;
use tgate_cli::route::{run_route, RouteArgs};

/// Tenant Gate CLI.
///
/// Drift gating and one-shot routing runs for the multi-tenant isolation
/// layer.
#[derive(Parser, Debug)]
#[command(name = "tgate", version, about, long_about = None)]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    /// Path to a YAML router configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare a candidate vector against a baseline with the KS drift gate.
    Gate(GateArgs),

    /// Register a credential, set its baseline, and process one request.
    Route(RouteArgs),
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let result = match cli.command {
        Commands::Gate(args) => run_gate(&args),
        Commands::Route(args) => {
            load_config(cli.config.as_deref()).and_then(|config| run_route(&args, config))
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
