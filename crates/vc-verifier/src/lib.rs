//! # Chain Verifier
//!
//! Offline auditor for the persisted ledger. Replays the chain from
//! genesis, recomputing every hash and checking every prev-hash link,
//! and reports each point of divergence. Detection only: findings are
//! never auto-corrected, that hard line belongs to this crate's charter.
//!
//! A separate read-only analytics pass summarizes the payload
//! (block/alert counts, per-metric averages); it takes no part in the
//! integrity check.

pub mod report;
pub mod verifier;

pub use report::{render_summary, ChainSummary};
pub use verifier::{verify_chain, Finding, FindingKind, VerificationReport};
