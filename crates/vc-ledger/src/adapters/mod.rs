//! Store adapters implementing the `LedgerStore` port.

pub mod file;
pub mod memory;

pub use file::FileLedgerStore;
pub use memory::InMemoryLedgerStore;
