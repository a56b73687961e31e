//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the ledger engine requires the host to provide.

use shared_types::{LedgerBlock, StoreError};

/// Abstract interface over ledger persistence.
///
/// Production: `FileLedgerStore` (JSON array on disk).
/// Testing: `InMemoryLedgerStore`.
///
/// The logical content is always the full ordered chain; `append` must
/// leave the persisted chain equal to the previous content plus `block`.
pub trait LedgerStore: Send {
    /// Read the full persisted chain, oldest first.
    ///
    /// Reads the durable artifact, not any in-memory engine state; the
    /// offline verifier relies on this to audit what is actually stored.
    fn load(&self) -> Result<Vec<LedgerBlock>, StoreError>;

    /// Durably append one block to the chain.
    fn append(&mut self, block: &LedgerBlock) -> Result<(), StoreError>;

    /// Remove all blocks, leaving an empty persisted chain.
    fn clear(&mut self) -> Result<(), StoreError>;
}
