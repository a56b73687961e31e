//! File-backed ledger store.
//!
//! Persists the chain as one JSON array of blocks. Every append rewrites
//! the whole array; chains here grow by one block per generation cycle,
//! so the rewrite stays cheap and keeps the on-disk artifact identical
//! to the documented format. The rewrite goes through a temp file,
//! `sync_all`, and an atomic rename, so a crash mid-write leaves the
//! previous chain intact.

use std::io::Write;
use std::path::{Path, PathBuf};

use shared_types::{LedgerBlock, StoreError};
use tracing::info;

use crate::ports::LedgerStore;

/// JSON-array ledger store on the local filesystem.
pub struct FileLedgerStore {
    blocks: Vec<LedgerBlock>,
    path: PathBuf,
}

impl FileLedgerStore {
    /// Open a store at `path`, loading any existing chain.
    ///
    /// A missing file is an empty chain; a present but undecodable file
    /// is an error rather than a silent reset.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let blocks = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
                message: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        if blocks.is_empty() {
            info!(path = %path.display(), "No existing ledger, starting empty");
        } else {
            info!(
                path = %path.display(),
                blocks = blocks.len(),
                "Loaded existing ledger"
            );
        }

        Ok(Self { blocks, path })
    }

    /// The path of the persisted ledger file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_to_file(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(&self.blocks).map_err(|e| StoreError::Corrupt {
            message: e.to_string(),
        })?;

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl LedgerStore for FileLedgerStore {
    fn load(&self) -> Result<Vec<LedgerBlock>, StoreError> {
        // Fresh read of the durable artifact, bypassing the cached copy.
        match std::fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn append(&mut self, block: &LedgerBlock) -> Result<(), StoreError> {
        self.blocks.push(block.clone());
        if let Err(e) = self.save_to_file() {
            self.blocks.pop();
            return Err(e);
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.blocks.clear();
        self.save_to_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{chained_hash, BlockData, MetricStats, PressureStats, GENESIS_PREV_HASH};

    fn block(timestamp: &str, prev_hash: &str) -> LedgerBlock {
        let data = BlockData {
            frequency: MetricStats {
                mean: 80.0,
                std_dev: 2.0,
            },
            pressure: PressureStats {
                mean: [120.0, 80.0],
                std_dev: [1.0, 1.0],
            },
            oxygen: MetricStats {
                mean: 97.0,
                std_dev: 0.5,
            },
        };
        LedgerBlock {
            timestamp: timestamp.to_string(),
            hash: chained_hash(prev_hash, &data, timestamp),
            prev_hash: prev_hash.to_string(),
            alert: false,
            data,
        }
    }

    #[test]
    fn test_missing_file_is_empty_chain() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLedgerStore::open(dir.path().join("ledger.json")).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        let mut store = FileLedgerStore::open(&path).unwrap();
        let first = block("2024-01-01T00:00:00", GENESIS_PREV_HASH);
        let second = block("2024-01-01T00:00:01", &first.hash);
        store.append(&first).unwrap();
        store.append(&second).unwrap();

        // A second store over the same path sees the full chain.
        let reopened = FileLedgerStore::open(&path).unwrap();
        let chain = reopened.load().unwrap();
        assert_eq!(chain, vec![first, second]);
    }

    #[test]
    fn test_clear_leaves_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        let mut store = FileLedgerStore::open(&path).unwrap();
        store.append(&block("t", GENESIS_PREV_HASH)).unwrap();
        store.clear().unwrap();

        assert!(store.load().unwrap().is_empty());
        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim(), "[]");
    }

    #[test]
    fn test_undecodable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, b"not json").unwrap();

        match FileLedgerStore::open(&path) {
            Err(StoreError::Corrupt { .. }) => {}
            Err(other) => panic!("expected corrupt error, got {other:?}"),
            Ok(_) => panic!("expected corrupt error, got a store"),
        }
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let mut store = FileLedgerStore::open(&path).unwrap();
        store.append(&block("t", GENESIS_PREV_HASH)).unwrap();
        assert!(!path.with_extension("tmp").exists());
    }
}
