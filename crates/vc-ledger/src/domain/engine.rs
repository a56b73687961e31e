//! # Ledger Engine
//!
//! Turns completed vitals records into hash-chained blocks and persists
//! them. The engine is the single owner of the running `prev_hash`: hash
//! computation, the append, and the `prev_hash` advance happen inside one
//! `&mut self` call, so two blocks can never be computed against the same
//! predecessor.

use shared_types::{chained_hash, BlockData, LedgerBlock, LedgerError, GENESIS_PREV_HASH};
use tracing::{error, info};

use crate::domain::assembler::CompleteVitals;
use crate::ports::LedgerStore;

/// Heart-frequency mean at or above which a block is flagged.
pub const ALERT_FREQUENCY_MEAN: f64 = 200.0;
/// Oxygen mean below which a block is flagged.
pub const ALERT_OXYGEN_MIN: f64 = 90.0;
/// Oxygen mean above which a block is flagged.
pub const ALERT_OXYGEN_MAX: f64 = 100.0;
/// Systolic-pressure mean at or above which a block is flagged.
pub const ALERT_SYSTOLIC_MEAN: f64 = 200.0;

/// Evaluate the fixed alert thresholds over a block payload.
pub fn evaluate_alert(data: &BlockData) -> bool {
    data.frequency.mean >= ALERT_FREQUENCY_MEAN
        || data.oxygen.mean < ALERT_OXYGEN_MIN
        || data.oxygen.mean > ALERT_OXYGEN_MAX
        || data.pressure.mean[0] >= ALERT_SYSTOLIC_MEAN
}

/// Appends completed vitals records to the hash-chained ledger.
pub struct LedgerEngine<S: LedgerStore> {
    store: S,
    prev_hash: String,
    height: u64,
}

impl<S: LedgerStore> LedgerEngine<S> {
    /// Create an engine over an empty or freshly cleared store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            prev_hash: GENESIS_PREV_HASH.to_string(),
            height: 0,
        }
    }

    /// Create an engine that resumes an existing chain.
    ///
    /// The running `prev_hash` picks up from the last persisted block,
    /// so appends continue the chain rather than forking it.
    pub fn resume(store: S) -> Result<Self, LedgerError> {
        let chain = store.load().map_err(|source| LedgerError::Persistence {
            index: 0,
            source,
        })?;
        let prev_hash = chain
            .last()
            .map(|block| block.hash.clone())
            .unwrap_or_else(|| GENESIS_PREV_HASH.to_string());
        Ok(Self {
            store,
            prev_hash,
            height: chain.len() as u64,
        })
    }

    /// Append one completed record to the chain.
    ///
    /// Computes the alert flags and the chained hash, constructs the
    /// immutable block, persists it, and only then advances `prev_hash`.
    /// A persistence failure is fatal for the run: the block's hash has
    /// been computed but is not on disk, and there is no rollback.
    pub fn append(&mut self, complete: CompleteVitals) -> Result<LedgerBlock, LedgerError> {
        let CompleteVitals { timestamp, data } = complete;

        let alert = evaluate_alert(&data);
        let hash = chained_hash(&self.prev_hash, &data, &timestamp);
        let block = LedgerBlock {
            timestamp,
            data,
            alert,
            prev_hash: self.prev_hash.clone(),
            hash,
        };

        if let Err(source) = self.store.append(&block) {
            error!(
                index = self.height,
                hash = %block.hash,
                "Block hashed but not persisted, aborting"
            );
            return Err(LedgerError::Persistence {
                index: self.height,
                source,
            });
        }

        self.prev_hash = block.hash.clone();
        let index = self.height;
        self.height += 1;

        info!(
            index,
            hash = %&block.hash[..16],
            alert = block.alert,
            "Block appended"
        );
        Ok(block)
    }

    /// Number of blocks appended (chain height).
    pub fn height(&self) -> u64 {
        self.height
    }

    /// The hash the next block will link to.
    pub fn prev_hash(&self) -> &str {
        &self.prev_hash
    }

    /// Consume the engine, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }
}
