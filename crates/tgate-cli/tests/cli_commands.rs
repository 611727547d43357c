//! Subcommand handlers driven through real files on disk.

use std::path::PathBuf;

use tempfile::TempDir;
use tgate_cli::gate::{evaluate, GateArgs};
use tgate_cli::route::{execute, RouteArgs, RouteOutcome};
use tgate_router::RouterConfig;

const BASELINE: [f64; 17] = [
    -2.0, -1.5, -1.2, -1.0, -0.8, -0.5, -0.3, -0.1, 0.0, 0.1, 0.3, 0.5, 0.8, 1.0, 1.2, 1.5, 2.0,
];

fn write_vector(dir: &TempDir, name: &str, values: &[f64]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(values).unwrap()).unwrap();
    path
}

fn gate_args(dir: &TempDir, candidate: &[f64]) -> GateArgs {
    GateArgs {
        baseline: write_vector(dir, "baseline.json", &BASELINE),
        candidate: write_vector(dir, "candidate.json", candidate),
        threshold: 0.10,
        metric: "ks_2samp".to_string(),
    }
}

fn route_args(dir: &TempDir, baseline: &[f64], tokens: &[f64], quota: Option<u64>) -> RouteArgs {
    RouteArgs {
        credential: "openai-key".to_string(),
        baseline: write_vector(dir, "baseline.json", baseline),
        tokens: write_vector(dir, "tokens.json", tokens),
        quota,
    }
}

#[test]
fn gate_fails_shifted_candidate() {
    let dir = TempDir::new().unwrap();
    let shifted: Vec<f64> = BASELINE.iter().map(|v| v + 1.5).collect();
    let result = evaluate(&gate_args(&dir, &shifted)).unwrap();
    assert!(!result.passed);
    assert_eq!(result.reason, "FAIL: pvalue 0.010041 <= threshold 0.100000");
}

#[test]
fn gate_passes_identical_candidate() {
    let dir = TempDir::new().unwrap();
    let result = evaluate(&gate_args(&dir, &BASELINE)).unwrap();
    assert!(result.passed);
    assert_eq!(result.ks.statistic, 0.0);
    assert_eq!(result.metric, "ks_2samp");
}

#[test]
fn gate_rejects_bad_threshold() {
    let dir = TempDir::new().unwrap();
    let mut args = gate_args(&dir, &BASELINE);
    args.threshold = 1.0;
    let err = evaluate(&args).unwrap_err();
    assert!(format!("{err:#}").contains("strictly between 0 and 1"));
}

#[test]
fn gate_rejects_empty_candidate_file() {
    let dir = TempDir::new().unwrap();
    assert!(evaluate(&gate_args(&dir, &[])).is_err());
}

#[tokio::test]
async fn route_accepts_matching_request() {
    let dir = TempDir::new().unwrap();
    let args = route_args(&dir, &[0.0; 8], &[0.0; 8], None);
    let report = execute(&args, RouterConfig::default()).await.unwrap();

    assert!(report.accepted());
    match &report.outcome {
        RouteOutcome::Accepted { result } => {
            assert_eq!(result.drift, 0.0);
            assert_eq!(result.witness_hash.len(), 64);
        }
        other => panic!("expected accepted, got {other:?}"),
    }
    assert_eq!(report.events.len(), 3);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcome"]["status"], "accepted");
    assert_eq!(json["events"][0]["state"], "BASELINE_SET");
    assert_eq!(json["events"][2]["state"], "RESULT_WITNESSED");
    assert!(!json.to_string().contains("openai-key"));
}

#[tokio::test]
async fn route_reports_contamination() {
    let dir = TempDir::new().unwrap();
    let args = route_args(&dir, &[0.0; 8], &[10.0; 8], None);
    let report = execute(&args, RouterConfig::default()).await.unwrap();

    assert!(!report.accepted());
    match &report.outcome {
        RouteOutcome::Rejected { error } => assert!(error.contains("drift"), "{error}"),
        other => panic!("expected rejected, got {other:?}"),
    }
    let states: Vec<String> = report
        .events
        .iter()
        .map(|e| e.state.as_str().to_string())
        .collect();
    assert_eq!(
        states,
        ["BASELINE_SET", "TOKEN_INGRESS", "CONTAMINATION_DETECTED"]
    );
}

#[tokio::test]
async fn route_reports_quota_rejection() {
    let dir = TempDir::new().unwrap();
    let args = route_args(&dir, &[0.0; 8], &[0.0; 8], Some(2));
    let report = execute(&args, RouterConfig::default()).await.unwrap();

    match &report.outcome {
        RouteOutcome::Rejected { error } => {
            assert!(error.contains("exceeded quota: 8>2"), "{error}")
        }
        other => panic!("expected rejected, got {other:?}"),
    }
    // Only the baseline was recorded.
    assert_eq!(report.events.len(), 1);
}

#[tokio::test]
async fn route_with_empty_baseline_is_an_error() {
    let dir = TempDir::new().unwrap();
    let args = route_args(&dir, &[], &[0.0; 4], None);
    let err = execute(&args, RouterConfig::default()).await.unwrap_err();
    assert!(format!("{err:#}").contains("failed to record baseline"));
}

#[tokio::test]
async fn route_rejects_out_of_range_threshold() {
    let dir = TempDir::new().unwrap();
    let args = route_args(&dir, &[0.0; 4], &[0.0; 4], None);
    let config = RouterConfig {
        drift_threshold: f64::NAN,
        ..RouterConfig::default()
    };
    let err = execute(&args, config).await.unwrap_err();
    assert!(format!("{err:#}").contains("invalid router configuration"));
}
