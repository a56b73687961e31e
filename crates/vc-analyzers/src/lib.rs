//! # Vitals Analyzers
//!
//! One analyzer per metric, each owning a bounded rolling window of the
//! most recent readings. On every new reading an analyzer updates its
//! window and emits a [`shared_types::MetricSummary`] stamped with the
//! reading's own timestamp, so summaries from different analyzers for the
//! same generation cycle share a join key.
//!
//! Pure domain logic: no I/O, no failure modes.

pub mod analyzer;
pub mod window;

pub use analyzer::{
    FrequencyAnalyzer, OxygenAnalyzer, PressureAnalyzer, VitalsAnalyzer,
};
pub use window::{RollingWindow, DEFAULT_WINDOW_SIZE};
