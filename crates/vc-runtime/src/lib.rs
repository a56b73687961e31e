//! # VitalChain Runtime
//!
//! Wires the pipeline together: a generator task fans raw readings out
//! to three analyzer tasks over dedicated channels; the analyzers push
//! their summaries onto one shared channel consumed by the join/ledger
//! task.
//!
//! ```text
//! Generator ──readings──┬──→ FrequencyAnalyzer ──┐
//!                       ├──→ PressureAnalyzer  ──┼──summaries──→ Assembler → LedgerEngine → store
//!                       └──→ OxygenAnalyzer    ──┘
//! ```
//!
//! End-of-stream is signaled by channel closure in dependency order:
//! the generator drops the reading senders, each analyzer exits when its
//! reading channel ends and drops its summary sender, and the ledger
//! task exits once every summary sender is gone.

pub mod config;
pub mod generator;
pub mod pipeline;

pub use config::PipelineConfig;
pub use generator::VitalsGenerator;
pub use pipeline::{run, PipelineSummary};
