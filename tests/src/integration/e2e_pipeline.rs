//! Full pipeline runs over a real file-backed ledger.

use std::time::Duration;

use shared_types::GENESIS_PREV_HASH;
use vc_ledger::{FileLedgerStore, LedgerStore};
use vc_runtime::{pipeline, PipelineConfig};
use vc_verifier::{render_summary, verify_chain, ChainSummary};

fn fast_config(cycles: u64, ledger_path: std::path::PathBuf) -> PipelineConfig {
    PipelineConfig {
        cycles,
        cadence: Duration::from_millis(0),
        ledger_path,
        ..PipelineConfig::default()
    }
}

#[tokio::test]
async fn test_pipeline_run_builds_valid_chain_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let config = fast_config(12, path.clone());

    let store = FileLedgerStore::open(&path).unwrap();
    let summary = pipeline::run(&config, store).await.unwrap();
    assert_eq!(summary.blocks, 12);

    // Audit the durable artifact through a fresh store, the way the
    // offline verifier does.
    let chain = FileLedgerStore::open(&path).unwrap().load().unwrap();
    assert_eq!(chain.len(), 12);

    let report = verify_chain(&chain);
    assert!(report.passed(), "findings: {:?}", report.findings);

    assert_eq!(chain[0].prev_hash, GENESIS_PREV_HASH);
    for window in chain.windows(2) {
        assert_eq!(window[1].prev_hash, window[0].hash);
    }
    for block in &chain {
        assert_eq!(block.hash.len(), 64);
        assert_eq!(block.recompute_hash(), block.hash);
    }
}

#[tokio::test]
async fn test_chain_timestamps_are_unique_and_ordered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let config = fast_config(8, path.clone());

    pipeline::run(&config, FileLedgerStore::open(&path).unwrap())
        .await
        .unwrap();

    let chain = FileLedgerStore::open(&path).unwrap().load().unwrap();
    for window in chain.windows(2) {
        assert!(window[0].timestamp < window[1].timestamp);
    }
}

#[tokio::test]
async fn test_summary_statistics_over_real_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let config = fast_config(10, path.clone());

    pipeline::run(&config, FileLedgerStore::open(&path).unwrap())
        .await
        .unwrap();

    let chain = FileLedgerStore::open(&path).unwrap().load().unwrap();
    let summary = ChainSummary::from_chain(&chain).unwrap();
    assert_eq!(summary.total_blocks, 10);
    // Generator domains keep every average inside the raw-reading bounds.
    assert!((60.0..=180.0).contains(&summary.avg_frequency));
    assert!((110.0..=180.0).contains(&summary.avg_systolic));
    assert!((70.0..=110.0).contains(&summary.avg_diastolic));
    assert!((90.0..=100.0).contains(&summary.avg_oxygen));
}

#[tokio::test]
async fn test_empty_ledger_verifies_clean() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileLedgerStore::open(dir.path().join("ledger.json")).unwrap();
    let chain = store.load().unwrap();

    let report = verify_chain(&chain);
    assert!(report.passed());
    assert!(report.render().contains("empty"));
    assert!(render_summary(&chain).contains("No blocks"));
}

#[tokio::test]
async fn test_rerun_after_clear_starts_fresh_chain() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    pipeline::run(&fast_config(3, path.clone()), FileLedgerStore::open(&path).unwrap())
        .await
        .unwrap();

    let mut store = FileLedgerStore::open(&path).unwrap();
    store.clear().unwrap();
    pipeline::run(&fast_config(4, path.clone()), store)
        .await
        .unwrap();

    let chain = FileLedgerStore::open(&path).unwrap().load().unwrap();
    assert_eq!(chain.len(), 4);
    assert_eq!(chain[0].prev_hash, GENESIS_PREV_HASH);
    assert!(verify_chain(&chain).passed());
}
