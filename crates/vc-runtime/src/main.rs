//! # VitalChain Pipeline Binary
//!
//! Runs the full pipeline: clears the ledger, drives the configured
//! number of generation cycles through the analyzers and the ledger
//! engine, and logs the run summary. Audit the resulting ledger with
//! the `vc-verify` binary.

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use vc_ledger::{FileLedgerStore, LedgerStore};
use vc_runtime::{pipeline, PipelineConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = PipelineConfig::from_env();
    info!(
        cycles = config.cycles,
        cadence_ms = config.cadence.as_millis() as u64,
        ledger = %config.ledger_path.display(),
        "Starting VitalChain pipeline"
    );

    // Each run starts from an empty chain, like the reference pipeline.
    let mut store =
        FileLedgerStore::open(&config.ledger_path).context("Failed to open ledger store")?;
    store.clear().context("Failed to reset ledger")?;

    let summary = pipeline::run(&config, store)
        .await
        .context("Pipeline run failed")?;

    info!(
        blocks = summary.blocks,
        alerts = summary.alerts,
        evicted = summary.evicted,
        "VitalChain run finished"
    );
    Ok(())
}
