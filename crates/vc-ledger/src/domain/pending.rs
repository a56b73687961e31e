//! A partial vitals group awaiting completion.
//!
//! Tracks which of the three required summaries have arrived for one
//! timestamp. Insertion is last-write-wins per metric: each analyzer
//! emits exactly once per cycle, so a duplicate only occurs on replay
//! and the newest value stands.

use shared_types::{BlockData, MetricStats, MetricSummary, PressureStats};

/// A partial per-timestamp group awaiting all three metric summaries.
#[derive(Debug, Clone)]
pub struct PendingVitalsGroup {
    /// Timestamp (join key) this group assembles.
    pub timestamp: String,
    /// Unix seconds when this group was opened (for expiry).
    pub opened_at: u64,
    /// Heart-frequency statistics, once arrived.
    pub frequency: Option<MetricStats>,
    /// Blood-pressure statistics, once arrived.
    pub pressure: Option<PressureStats>,
    /// Oxygen-saturation statistics, once arrived.
    pub oxygen: Option<MetricStats>,
}

impl PendingVitalsGroup {
    /// Open an empty group for `timestamp`.
    pub fn new(timestamp: String, opened_at: u64) -> Self {
        Self {
            timestamp,
            opened_at,
            frequency: None,
            pressure: None,
            oxygen: None,
        }
    }

    /// Record one summary's statistics, overwriting any earlier value of
    /// the same kind.
    pub fn insert(&mut self, summary: MetricSummary) {
        match summary {
            MetricSummary::Frequency { stats, .. } => self.frequency = Some(stats),
            MetricSummary::Pressure { stats, .. } => self.pressure = Some(stats),
            MetricSummary::Oxygen { stats, .. } => self.oxygen = Some(stats),
        }
    }

    /// Whether all three metrics are present.
    pub fn is_complete(&self) -> bool {
        self.frequency.is_some() && self.pressure.is_some() && self.oxygen.is_some()
    }

    /// Whether this group has been pending longer than `ttl_secs`.
    pub fn is_expired(&self, now: u64, ttl_secs: u64) -> bool {
        now.saturating_sub(self.opened_at) > ttl_secs
    }

    /// Consume the group into a block payload, if complete.
    pub fn take_data(self) -> Option<BlockData> {
        match (self.frequency, self.pressure, self.oxygen) {
            (Some(frequency), Some(pressure), Some(oxygen)) => Some(BlockData {
                frequency,
                pressure,
                oxygen,
            }),
            _ => None,
        }
    }

    /// Age of this group in seconds.
    pub fn age(&self, now: u64) -> u64 {
        now.saturating_sub(self.opened_at)
    }
}
