//! Best-score storage backends
//!
//! The stored value is a single non-negative integer:
//! - `LocalStorageStore`: browser LocalStorage, plain integer text (wasm only)
//! - `FileStore`: small JSON document on disk (native only)
//! - `MemoryStore`: in-process, with failure injection for tests

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use crate::error::StoreError;

/// Somewhere to keep the best score
pub trait ScoreStore: Debug {
    /// Read the stored best score. A missing value is `Ok(0)`.
    fn read_best(&self) -> Result<u32, StoreError>;

    /// Overwrite the stored best score
    fn write_best(&mut self, score: u32) -> Result<(), StoreError>;
}

/// Parse a stored integer, tolerating surrounding whitespace
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn parse_score(raw: &str) -> Result<u32, StoreError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| StoreError::Parse(raw.to_string()))
}

/// In-memory store. Clones share the same slot, so a caller can keep a handle
/// after moving a clone into a ledger.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemorySlot>>,
}

#[derive(Debug, Default)]
struct MemorySlot {
    value: Option<u32>,
    writes: u32,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a stored value
    pub fn with_best(score: u32) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().value = Some(score);
        store
    }

    /// Make every read fail
    pub fn failing_reads(self) -> Self {
        self.inner.borrow_mut().fail_reads = true;
        self
    }

    /// Make every write fail
    pub fn failing_writes(self) -> Self {
        self.inner.borrow_mut().fail_writes = true;
        self
    }

    /// Currently stored value
    pub fn stored(&self) -> Option<u32> {
        self.inner.borrow().value
    }

    /// Number of successful writes
    pub fn writes(&self) -> u32 {
        self.inner.borrow().writes
    }
}

impl ScoreStore for MemoryStore {
    fn read_best(&self) -> Result<u32, StoreError> {
        let slot = self.inner.borrow();
        if slot.fail_reads {
            return Err(StoreError::Unavailable("memory store read disabled".into()));
        }
        Ok(slot.value.unwrap_or(0))
    }

    fn write_best(&mut self, score: u32) -> Result<(), StoreError> {
        let mut slot = self.inner.borrow_mut();
        if slot.fail_writes {
            return Err(StoreError::Unavailable("memory store write disabled".into()));
        }
        slot.value = Some(score);
        slot.writes += 1;
        Ok(())
    }
}
