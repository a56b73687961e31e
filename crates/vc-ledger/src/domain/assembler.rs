//! # Stateful Assembler
//!
//! Joins per-metric summaries into complete vitals records.
//!
//! The assembler buffers incoming summaries by timestamp until all three
//! metric kinds have arrived, then releases the group and drops it from
//! the pending set. Groups are released in the order they *complete*
//! (the third-arriving metric decides); there is no reordering buffer.
//!
//! A group whose third metric never arrives would otherwise sit in the
//! pending map forever, so each accept also sweeps groups older than a
//! configurable TTL and evicts them with a warning.

use std::collections::HashMap;

use shared_types::{BlockData, MetricSummary};
use tracing::warn;

use crate::domain::pending::PendingVitalsGroup;

/// Configuration for the assembler's pending set.
#[derive(Debug, Clone)]
pub struct AssemblyConfig {
    /// Seconds a partial group may stay pending before eviction.
    pub group_ttl_secs: u64,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self { group_ttl_secs: 30 }
    }
}

/// A fully assembled vitals record, ready for the ledger engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteVitals {
    /// The generation-cycle timestamp all three summaries share.
    pub timestamp: String,
    /// The joined statistics payload.
    pub data: BlockData,
}

/// Groups summaries by timestamp and releases completed records.
#[derive(Debug, Default)]
pub struct VitalsAssembler {
    pending: HashMap<String, PendingVitalsGroup>,
    config: AssemblyConfig,
    evicted: u64,
}

impl VitalsAssembler {
    /// Create an assembler with the given pending-set configuration.
    pub fn new(config: AssemblyConfig) -> Self {
        Self {
            pending: HashMap::new(),
            config,
            evicted: 0,
        }
    }

    /// Fold one summary into the pending set.
    ///
    /// Returns the completed record when this summary was the last of
    /// the three for its timestamp; the group is removed from the
    /// pending set in the same step. Stale groups are swept first.
    pub fn accept(&mut self, summary: MetricSummary, now: u64) -> Option<CompleteVitals> {
        self.sweep_expired(now);

        let timestamp = summary.timestamp().to_string();
        let group = self
            .pending
            .entry(timestamp.clone())
            .or_insert_with(|| PendingVitalsGroup::new(timestamp.clone(), now));
        group.insert(summary);

        if !group.is_complete() {
            return None;
        }

        let group = self.pending.remove(&timestamp)?;
        let data = group.take_data()?;
        Some(CompleteVitals { timestamp, data })
    }

    /// Evict groups older than the configured TTL.
    ///
    /// Returns the number of groups evicted by this sweep.
    pub fn sweep_expired(&mut self, now: u64) -> usize {
        let ttl = self.config.group_ttl_secs;
        let stale: Vec<String> = self
            .pending
            .iter()
            .filter(|(_, group)| group.is_expired(now, ttl))
            .map(|(timestamp, _)| timestamp.clone())
            .collect();

        for timestamp in &stale {
            if let Some(group) = self.pending.remove(timestamp) {
                warn!(
                    timestamp = %timestamp,
                    age_secs = group.age(now),
                    "Evicting incomplete vitals group"
                );
            }
        }
        self.evicted += stale.len() as u64;
        stale.len()
    }

    /// Number of timestamps currently awaiting completion.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether a timestamp is still pending.
    pub fn is_pending(&self, timestamp: &str) -> bool {
        self.pending.contains_key(timestamp)
    }

    /// Total groups evicted since construction.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}
