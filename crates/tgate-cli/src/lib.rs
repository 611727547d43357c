//! # tgate-cli — Tenant Gate Command-Line Interface
//!
//! Operator tooling around the router and drift gate.
//!
//! ## Subcommands
//!
//! - `gate`: offline KS drift gate over two JSON vector files
//! - `route`: one-shot register / set-baseline / process run against an
//!   in-memory audit log, printing the result and the audit trail
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers delegate to the domain crates and only format output.
//! - Each `run_*` handler returns the process exit code.

pub mod gate;
pub mod input;
pub mod route;
