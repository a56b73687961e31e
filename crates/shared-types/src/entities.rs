//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Readings**: `VitalsReading` (one generation cycle of raw vitals)
//! - **Summaries**: `MetricKind`, `MetricStats`, `PressureStats`, `MetricSummary`
//! - **Ledger**: `BlockData`, `LedgerBlock`, `chained_hash`

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// The `prev_hash` of the first block in every chain.
pub const GENESIS_PREV_HASH: &str = "0";

/// The three vital metrics tracked by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Heart frequency in beats per minute.
    Frequency,
    /// Blood pressure as [systolic, diastolic] in mmHg.
    Pressure,
    /// Oxygen saturation in percent.
    Oxygen,
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricKind::Frequency => write!(f, "frequency"),
            MetricKind::Pressure => write!(f, "pressure"),
            MetricKind::Oxygen => write!(f, "oxygen"),
        }
    }
}

/// One raw vitals sample for a single generation cycle.
///
/// Produced by the generator and fanned out to all three analyzers;
/// each analyzer reads only its own field plus the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsReading {
    /// Cycle timestamp (`%Y-%m-%dT%H:%M:%S`), the join key downstream.
    pub timestamp: String,
    /// Heart frequency in bpm (expected domain 60-180, not validated).
    pub frequency: f64,
    /// Blood pressure [systolic, diastolic] in mmHg.
    pub pressure: [f64; 2],
    /// Oxygen saturation in percent (expected domain 90-100).
    pub oxygen: f64,
}

/// Mean and population standard deviation over one rolling window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    /// Arithmetic mean of the window.
    pub mean: f64,
    /// Population standard deviation (divisor N, not N-1).
    pub std_dev: f64,
}

/// Rolling statistics for blood pressure, per component.
///
/// Index 0 is systolic, index 1 is diastolic; the two windows evolve in
/// lockstep so both components always cover the same samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureStats {
    /// [systolic, diastolic] means.
    pub mean: [f64; 2],
    /// [systolic, diastolic] population standard deviations.
    pub std_dev: [f64; 2],
}

/// One analyzer's output for one generation cycle.
///
/// The variant is the closed set of metric kinds, so the assembler can
/// match exhaustively instead of dispatching on a string tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MetricSummary {
    /// Heart-frequency summary.
    Frequency {
        /// Timestamp of the reading this summary was computed for.
        timestamp: String,
        /// Window statistics.
        stats: MetricStats,
    },
    /// Blood-pressure summary.
    Pressure {
        /// Timestamp of the reading this summary was computed for.
        timestamp: String,
        /// Per-component window statistics.
        stats: PressureStats,
    },
    /// Oxygen-saturation summary.
    Oxygen {
        /// Timestamp of the reading this summary was computed for.
        timestamp: String,
        /// Window statistics.
        stats: MetricStats,
    },
}

impl MetricSummary {
    /// The metric kind this summary belongs to.
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricSummary::Frequency { .. } => MetricKind::Frequency,
            MetricSummary::Pressure { .. } => MetricKind::Pressure,
            MetricSummary::Oxygen { .. } => MetricKind::Oxygen,
        }
    }

    /// The join key: the originating reading's timestamp.
    pub fn timestamp(&self) -> &str {
        match self {
            MetricSummary::Frequency { timestamp, .. }
            | MetricSummary::Pressure { timestamp, .. }
            | MetricSummary::Oxygen { timestamp, .. } => timestamp,
        }
    }
}

/// The substantive payload of a ledger block: all three metric summaries
/// for one timestamp, stripped of their kind/timestamp wrappers.
///
/// Field declaration order is the canonical hash order; see
/// [`BlockData::canonical_json`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockData {
    /// Heart-frequency statistics.
    pub frequency: MetricStats,
    /// Blood-pressure statistics.
    pub pressure: PressureStats,
    /// Oxygen-saturation statistics.
    pub oxygen: MetricStats,
}

impl BlockData {
    /// Deterministic serialization used as the hash input.
    ///
    /// serde_json emits struct fields in declaration order
    /// (frequency, pressure, oxygen, each mean then std_dev) with
    /// shortest-roundtrip float rendering, so the same `BlockData`
    /// always yields the same string, including after a load from disk.
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// An immutable block in the hash-chained ledger.
///
/// Invariants: `hash == chained_hash(prev_hash, data, timestamp)`, and
/// `prev_hash` equals the previous block's `hash` (the first block links
/// to [`GENESIS_PREV_HASH`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerBlock {
    /// Generation-cycle timestamp this block covers.
    pub timestamp: String,
    /// Aggregated vitals statistics.
    pub data: BlockData,
    /// Whether any alert threshold fired for this cycle.
    pub alert: bool,
    /// Hash of the preceding block (hex, or `"0"` for genesis linkage).
    pub prev_hash: String,
    /// SHA-256 of `prev_hash || canonical(data) || timestamp` (64 hex chars).
    pub hash: String,
}

impl LedgerBlock {
    /// Recompute this block's hash from its own stored fields.
    pub fn recompute_hash(&self) -> String {
        chained_hash(&self.prev_hash, &self.data, &self.timestamp)
    }
}

/// Compute the chained block hash.
///
/// `SHA256(prev_hash || canonical(data) || timestamp)`, hex-encoded.
pub fn chained_hash(prev_hash: &str, data: &BlockData, timestamp: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prev_hash.as_bytes());
    hasher.update(data.canonical_json().as_bytes());
    hasher.update(timestamp.as_bytes());
    hex::encode(hasher.finalize())
}
