//! JSON file store for native builds

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ScoreStore;
use crate::error::StoreError;

#[derive(Debug, Serialize, Deserialize)]
struct BestScoreFile {
    best_score: u32,
}

/// Best score kept in a JSON file, written via a temp file and rename
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `tap_ball_best.json` in the system temp directory
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir().join("tap_ball_best.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn read_best(&self) -> Result<u32, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                let file: BestScoreFile = serde_json::from_str(&json)?;
                Ok(file.best_score)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn write_best(&mut self, score: u32) -> Result<(), StoreError> {
        let json = serde_json::to_string(&BestScoreFile { best_score: score })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
