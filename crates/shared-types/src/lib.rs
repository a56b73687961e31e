//! # Shared Types - Core Domain Entities
//!
//! Defines the entities that flow through the VitalChain pipeline:
//! raw vitals readings, per-metric rolling summaries, assembled block
//! payloads, and the hash-chained ledger blocks themselves.
//!
//! Every other crate in the workspace depends on this one and nothing
//! else inside the workspace, so the pipeline stages stay decoupled.

pub mod entities;
pub mod errors;

pub use entities::{
    chained_hash, BlockData, LedgerBlock, MetricKind, MetricStats, MetricSummary, PressureStats,
    VitalsReading, GENESIS_PREV_HASH,
};
pub use errors::{LedgerError, StoreError};
