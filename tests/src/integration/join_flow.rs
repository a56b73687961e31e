//! Analyzer-to-assembler join flow, without the async plumbing.

use shared_types::VitalsReading;
use vc_analyzers::{FrequencyAnalyzer, OxygenAnalyzer, PressureAnalyzer, VitalsAnalyzer};
use vc_ledger::{AssemblyConfig, InMemoryLedgerStore, LedgerEngine, LedgerStore, VitalsAssembler};
use vc_verifier::verify_chain;

fn reading(timestamp: &str) -> VitalsReading {
    VitalsReading {
        timestamp: timestamp.to_string(),
        frequency: 80.0,
        pressure: [120.0, 80.0],
        oxygen: 97.0,
    }
}

#[test]
fn test_summaries_join_in_any_arrival_order() {
    let mut frequency = FrequencyAnalyzer::new();
    let mut pressure = PressureAnalyzer::new();
    let mut oxygen = OxygenAnalyzer::new();
    let mut assembler = VitalsAssembler::new(AssemblyConfig::default());

    let sample = reading("2024-01-01T00:00:00");
    // Oxygen, frequency, pressure: completion happens on the third.
    assert!(assembler.accept(oxygen.update(&sample), 0).is_none());
    assert!(assembler.accept(frequency.update(&sample), 0).is_none());
    let complete = assembler.accept(pressure.update(&sample), 0).unwrap();

    assert_eq!(complete.timestamp, "2024-01-01T00:00:00");
    assert_eq!(complete.data.frequency.mean, 80.0);
    assert_eq!(complete.data.pressure.mean, [120.0, 80.0]);
    assert_eq!(complete.data.oxygen.mean, 97.0);
    assert!(!assembler.is_pending("2024-01-01T00:00:00"));
}

#[test]
fn test_joined_records_chain_cleanly() {
    let mut frequency = FrequencyAnalyzer::new();
    let mut pressure = PressureAnalyzer::new();
    let mut oxygen = OxygenAnalyzer::new();
    let mut assembler = VitalsAssembler::new(AssemblyConfig::default());
    let mut engine = LedgerEngine::new(InMemoryLedgerStore::new());

    for cycle in 0..5 {
        let sample = reading(&format!("2024-01-01T00:00:0{cycle}"));
        for summary in [
            frequency.update(&sample),
            pressure.update(&sample),
            oxygen.update(&sample),
        ] {
            if let Some(complete) = assembler.accept(summary, cycle) {
                engine.append(complete).unwrap();
            }
        }
    }

    assert_eq!(engine.height(), 5);
    let chain = engine.into_store().load().unwrap();
    assert!(verify_chain(&chain).passed());
}
