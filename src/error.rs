//! Error types
//!
//! The core has no fatal conditions. These cover construction of an arena from
//! untrusted dimensions and the best-score store, whose failures are logged and
//! swallowed by [`crate::ScoreLedger`].

use thiserror::Error;

/// Arena construction errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ArenaError {
    /// Width or height is zero, negative or not finite
    #[error("invalid arena dimension {width}x{height}: sides must be at least 1px")]
    InvalidDimension { width: f32, height: f32 },
}

/// Best-score store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backing storage could not be reached (no window, storage disabled, ...)
    #[error("score storage unavailable: {0}")]
    Unavailable(String),

    /// Stored value is not a non-negative integer
    #[error("stored best score is not a valid integer: {0:?}")]
    Parse(String),

    #[error("score file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("score file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
