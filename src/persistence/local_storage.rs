//! Browser LocalStorage store

use super::{ScoreStore, parse_score};
use crate::error::StoreError;

/// Best score under a LocalStorage key, stored as plain integer text
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: &'static str,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl LocalStorageStore {
    pub const DEFAULT_KEY: &'static str = "highScore";

    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("LocalStorage not available".into()))
    }
}

impl ScoreStore for LocalStorageStore {
    fn read_best(&self) -> Result<u32, StoreError> {
        let storage = Self::storage()?;
        match storage.get_item(self.key) {
            Ok(Some(raw)) => parse_score(&raw),
            Ok(None) => Ok(0),
            Err(e) => Err(StoreError::Unavailable(format!("{e:?}"))),
        }
    }

    fn write_best(&mut self, score: u32) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(self.key, &score.to_string())
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
