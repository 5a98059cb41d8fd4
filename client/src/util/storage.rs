//! `localStorage`-backed snapshot repository.
//!
//! The repository holds only the storage key and looks up `window.localStorage`
//! on every call, so it stays `Send + Sync` and can live inside a signal.
//! Outside the browser (`csr` disabled) it behaves as an empty store that
//! accepts and drops writes.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use board::doc::Element;
use board::storage::{SnapshotRepository, StorageError};
#[cfg(feature = "csr")]
use board::snapshot;

/// Snapshot repository persisting to `window.localStorage` under one key.
#[derive(Clone, Debug)]
pub struct LocalStorageRepository {
    key: String,
}

impl LocalStorageRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Storage key this repository reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(StorageError::Read(format!("{e:?}"))),
    }
}

impl SnapshotRepository for LocalStorageRepository {
    fn load(&self) -> Result<Option<Vec<Element>>, StorageError> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?
                .get_item(&self.key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))?;
            match raw {
                Some(raw) => Ok(Some(snapshot::decode(&raw)?)),
                None => Ok(None),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    fn save(&mut self, elements: &[Element]) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let raw = snapshot::encode(elements)?;
            local_storage()?
                .set_item(&self.key, &raw)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("dropping {} elements for {} outside the browser", elements.len(), self.key);
            Ok(())
        }
    }
}
