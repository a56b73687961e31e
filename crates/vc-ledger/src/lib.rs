//! # VitalChain Ledger
//!
//! The consumer half of the pipeline: a **stateful assembler** buffers
//! per-metric summaries by timestamp until all three metrics have
//! arrived, and the **ledger engine** turns each completed group into an
//! immutable block chained to its predecessor by SHA-256, persisting the
//! chain through a pluggable store.
//!
//! ## Module Structure
//!
//! - `domain/` - assembler, pending groups, ledger engine (no I/O policy
//!   beyond the store port)
//! - `ports` - the `LedgerStore` outbound port
//! - `adapters/` - file-backed (JSON) and in-memory store adapters

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::{FileLedgerStore, InMemoryLedgerStore};
pub use domain::assembler::{AssemblyConfig, CompleteVitals, VitalsAssembler};
pub use domain::engine::LedgerEngine;
pub use domain::pending::PendingVitalsGroup;
pub use ports::LedgerStore;
