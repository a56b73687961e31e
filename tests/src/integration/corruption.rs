//! Tamper detection over the persisted ledger file.

use std::path::Path;
use std::time::Duration;

use vc_ledger::{FileLedgerStore, LedgerStore};
use vc_runtime::{pipeline, PipelineConfig};
use vc_verifier::{verify_chain, FindingKind};

async fn run_pipeline(path: &Path, cycles: u64) {
    let config = PipelineConfig {
        cycles,
        cadence: Duration::from_millis(0),
        ledger_path: path.to_path_buf(),
        ..PipelineConfig::default()
    };
    pipeline::run(&config, FileLedgerStore::open(path).unwrap())
        .await
        .unwrap();
}

fn tamper(path: &Path, edit: impl FnOnce(&mut serde_json::Value)) {
    let raw = std::fs::read_to_string(path).unwrap();
    let mut json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    edit(&mut json);
    std::fs::write(path, serde_json::to_string_pretty(&json).unwrap()).unwrap();
}

#[tokio::test]
async fn test_edited_payload_field_yields_one_hash_finding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    run_pipeline(&path, 6).await;

    tamper(&path, |json| {
        json[3]["data"]["oxygen"]["mean"] = serde_json::json!(42.0);
    });

    let chain = FileLedgerStore::open(&path).unwrap().load().unwrap();
    let report = verify_chain(&chain);
    assert!(!report.passed());
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].block_index, 3);
    assert_eq!(report.findings[0].kind, FindingKind::HashMismatch);
}

#[tokio::test]
async fn test_edited_frequency_mean_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    run_pipeline(&path, 4).await;

    tamper(&path, |json| {
        json[1]["data"]["frequency"]["mean"] = serde_json::json!(300.0);
    });

    let chain = FileLedgerStore::open(&path).unwrap().load().unwrap();
    let report = verify_chain(&chain);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].block_index, 1);
}

#[tokio::test]
async fn test_alert_flag_is_outside_the_hash_input() {
    // The hash covers prev_hash, data, and timestamp; the alert flag is
    // derived and not hashed, so flipping it alone goes undetected.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    run_pipeline(&path, 3).await;

    tamper(&path, |json| {
        let current = json[1]["alert"].as_bool().unwrap();
        json[1]["alert"] = serde_json::json!(!current);
    });

    let chain = FileLedgerStore::open(&path).unwrap().load().unwrap();
    assert!(verify_chain(&chain).passed());
}

#[tokio::test]
async fn test_swapped_blocks_break_both_links() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    run_pipeline(&path, 5).await;

    tamper(&path, |json| {
        let array = json.as_array_mut().unwrap();
        array.swap(1, 2);
    });

    let chain = FileLedgerStore::open(&path).unwrap().load().unwrap();
    let report = verify_chain(&chain);
    assert!(!report.passed());
    // Both swapped positions disagree with the walk's running hash.
    assert!(report
        .findings
        .iter()
        .any(|f| f.block_index == 1 && f.kind == FindingKind::PrevHashMismatch));
    assert!(report
        .findings
        .iter()
        .any(|f| f.block_index == 2 && f.kind == FindingKind::PrevHashMismatch));
}

#[tokio::test]
async fn test_truncated_tail_still_verifies() {
    // Removing trailing blocks is undetectable by the chain alone; the
    // remaining prefix must still verify clean.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    run_pipeline(&path, 5).await;

    tamper(&path, |json| {
        let array = json.as_array_mut().unwrap();
        array.truncate(3);
    });

    let chain = FileLedgerStore::open(&path).unwrap().load().unwrap();
    assert_eq!(chain.len(), 3);
    assert!(verify_chain(&chain).passed());
}

#[tokio::test]
async fn test_verification_of_tampered_chain_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    run_pipeline(&path, 4).await;

    tamper(&path, |json| {
        json[2]["data"]["pressure"]["mean"][0] = serde_json::json!(500.0);
    });

    let chain = FileLedgerStore::open(&path).unwrap().load().unwrap();
    assert_eq!(verify_chain(&chain), verify_chain(&chain));
}
