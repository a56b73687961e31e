//! # VitalChain Test Suite
//!
//! End-to-end tests exercising the whole pipeline: generator through
//! analyzers, assembly, ledger append, persistence, and the offline
//! audit over the durable artifact.

#[cfg(test)]
mod integration;
