//! Error types shared across pipeline subsystems.

use thiserror::Error;

/// Errors from a ledger store adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem failure.
    #[error("I/O error: {message}")]
    Io {
        /// Operating system error text.
        message: String,
    },

    /// The persisted ledger could not be decoded.
    #[error("Corrupt ledger file: {message}")]
    Corrupt {
        /// Decoder error text.
        message: String,
    },
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}

/// Errors from the ledger engine.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A block was hashed but could not be persisted.
    ///
    /// Fatal for the run: the in-memory chain and the on-disk chain have
    /// diverged, and there is no rollback for an acknowledged block.
    #[error("Failed to persist block #{index}: {source}")]
    Persistence {
        /// Index of the block that failed to persist.
        index: u64,
        /// The store error that caused the failure.
        #[source]
        source: StoreError,
    },

    /// A ledger worker task ended abnormally.
    #[error("Ledger worker failed: {message}")]
    Worker {
        /// Failure description from the task join.
        message: String,
    },
}
