//! Pipeline wiring and task lifecycle.

use std::time::{SystemTime, UNIX_EPOCH};

use shared_types::{LedgerError, MetricSummary, VitalsReading};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use vc_analyzers::{FrequencyAnalyzer, OxygenAnalyzer, PressureAnalyzer, VitalsAnalyzer};
use vc_ledger::{AssemblyConfig, LedgerEngine, LedgerStore, VitalsAssembler};

use crate::config::PipelineConfig;
use crate::generator::VitalsGenerator;

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Blocks appended to the ledger.
    pub blocks: u64,
    /// Blocks whose alert flag fired.
    pub alerts: u64,
    /// Incomplete pending groups evicted by the assembler.
    pub evicted: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn spawn_analyzer<A>(
    mut analyzer: A,
    mut readings: mpsc::Receiver<VitalsReading>,
    summaries: mpsc::Sender<MetricSummary>,
) -> JoinHandle<()>
where
    A: VitalsAnalyzer + 'static,
{
    tokio::spawn(async move {
        while let Some(reading) = readings.recv().await {
            let summary = analyzer.update(&reading);
            if summaries.send(summary).await.is_err() {
                // Consumer is gone; nothing left to feed.
                break;
            }
        }
        debug!(kind = %analyzer.kind(), "Analyzer stream ended");
    })
}

/// Run the pipeline to completion over the given store.
///
/// Drives `config.cycles` generation cycles at `config.cadence`, then
/// closes the channels and waits for every worker to drain. Returns the
/// run summary, or the ledger engine's fatal error if a block could not
/// be persisted after its hash was computed.
pub async fn run<S>(config: &PipelineConfig, store: S) -> Result<PipelineSummary, LedgerError>
where
    S: LedgerStore + 'static,
{
    let capacity = config.channel_capacity;
    let (frequency_tx, frequency_rx) = mpsc::channel::<VitalsReading>(capacity);
    let (pressure_tx, pressure_rx) = mpsc::channel::<VitalsReading>(capacity);
    let (oxygen_tx, oxygen_rx) = mpsc::channel::<VitalsReading>(capacity);
    let (summary_tx, mut summary_rx) = mpsc::channel::<MetricSummary>(capacity);

    let analyzer_handles = [
        spawn_analyzer(FrequencyAnalyzer::new(), frequency_rx, summary_tx.clone()),
        spawn_analyzer(PressureAnalyzer::new(), pressure_rx, summary_tx.clone()),
        spawn_analyzer(OxygenAnalyzer::new(), oxygen_rx, summary_tx.clone()),
    ];
    // The analyzers hold the only summary senders from here on, so the
    // ledger task observes end-of-stream once all three exit.
    drop(summary_tx);

    let assembly = AssemblyConfig {
        group_ttl_secs: config.group_ttl_secs,
    };
    let ledger_handle: JoinHandle<Result<PipelineSummary, LedgerError>> =
        tokio::spawn(async move {
            let mut assembler = VitalsAssembler::new(assembly);
            let mut engine = LedgerEngine::new(store);
            let mut alerts = 0u64;

            while let Some(summary) = summary_rx.recv().await {
                if let Some(complete) = assembler.accept(summary, unix_now()) {
                    let block = engine.append(complete)?;
                    if block.alert {
                        alerts += 1;
                    }
                }
            }

            Ok(PipelineSummary {
                blocks: engine.height(),
                alerts,
                evicted: assembler.evicted(),
            })
        });

    let mut generator = VitalsGenerator::new();
    for cycle in 0..config.cycles {
        let reading = generator.reading(cycle);
        let fan_out = tokio::join!(
            frequency_tx.send(reading.clone()),
            pressure_tx.send(reading.clone()),
            oxygen_tx.send(reading.clone()),
        );
        if fan_out.0.is_err() || fan_out.1.is_err() || fan_out.2.is_err() {
            // An analyzer died early; stop generating and let the
            // ledger task surface whatever went wrong downstream.
            break;
        }
        tokio::time::sleep(config.cadence).await;
    }

    // Close the reading channels; the analyzers drain and exit, which in
    // turn closes the summary channel.
    drop(frequency_tx);
    drop(pressure_tx);
    drop(oxygen_tx);

    for handle in analyzer_handles {
        let _ = handle.await;
    }
    let summary = ledger_handle
        .await
        .map_err(|e| LedgerError::Worker {
            message: e.to_string(),
        })??;

    info!(
        blocks = summary.blocks,
        alerts = summary.alerts,
        evicted = summary.evicted,
        "Pipeline run complete"
    );
    Ok(summary)
}
