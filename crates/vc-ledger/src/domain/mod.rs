//! Domain logic for assembly and ledger append.

pub mod assembler;
pub mod engine;
pub mod pending;
