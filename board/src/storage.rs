//! Snapshot persistence seam.
//!
//! The element store never touches browser storage directly. It is handed a
//! [`SnapshotRepository`] and calls `load` once on open and `save` after each
//! mutation. The client provides a `localStorage` implementation; tests use
//! [`MemoryRepository`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::doc::Element;
use crate::snapshot::{self, SnapshotError};

/// Error raised by a snapshot repository.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No backing store is reachable (e.g. storage disabled in the browser).
    #[error("storage unavailable")]
    Unavailable,
    /// Reading the stored value failed.
    #[error("storage read failed: {0}")]
    Read(String),
    /// Writing the value failed.
    #[error("storage write failed: {0}")]
    Write(String),
    /// The stored text could not be decoded, or the elements encoded.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Load/save access to the persisted element snapshot.
pub trait SnapshotRepository {
    /// Read the stored snapshot. `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store is unreachable or holds text
    /// that does not decode.
    fn load(&self) -> Result<Option<Vec<Element>>, StorageError>;

    /// Replace the stored snapshot with `elements`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if encoding or writing fails.
    fn save(&mut self, elements: &[Element]) -> Result<(), StorageError>;
}

/// In-memory repository holding the compact encoded snapshot.
///
/// Clones share the same slot, so a test can keep a handle after moving the
/// repository into a store and inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    slot: Arc<Mutex<Option<String>>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-seeded with raw stored text.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let repo = Self::default();
        *repo.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw.into());
        repo
    }

    /// The raw stored text, if anything was saved.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// How many times `save` has been called.
    #[must_use]
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotRepository for MemoryRepository {
    fn load(&self) -> Result<Option<Vec<Element>>, StorageError> {
        match self.raw() {
            Some(raw) => Ok(Some(snapshot::decode(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, elements: &[Element]) -> Result<(), StorageError> {
        let raw = snapshot::encode(elements)?;
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}
