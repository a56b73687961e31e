//! In-memory ledger store for tests and short-lived runs.

use shared_types::{LedgerBlock, StoreError};

use crate::ports::LedgerStore;

/// A `LedgerStore` holding the chain in a `Vec`.
///
/// Appends can be made to fail on demand, for exercising the engine's
/// fatal-persistence path.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    blocks: Vec<LedgerBlock>,
    fail_appends: bool,
}

impl InMemoryLedgerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `append` fail with an I/O error.
    pub fn fail_appends(&mut self, fail: bool) {
        self.fail_appends = fail;
    }

    /// Direct access to the stored chain.
    pub fn blocks(&self) -> &[LedgerBlock] {
        &self.blocks
    }

    /// Mutable access to the stored chain, for corruption tests.
    pub fn blocks_mut(&mut self) -> &mut Vec<LedgerBlock> {
        &mut self.blocks
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn load(&self) -> Result<Vec<LedgerBlock>, StoreError> {
        Ok(self.blocks.clone())
    }

    fn append(&mut self, block: &LedgerBlock) -> Result<(), StoreError> {
        if self.fail_appends {
            return Err(StoreError::Io {
                message: "append disabled".to_string(),
            });
        }
        self.blocks.push(block.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.blocks.clear();
        Ok(())
    }
}
