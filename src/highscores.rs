//! Best-score ledger
//!
//! Holds the best score read at startup and writes it back when a session
//! beats it. Store failures never reach the player: a failed read counts as 0
//! and a failed write is logged and dropped.

use crate::persistence::ScoreStore;

/// Best-ever score backed by a [`ScoreStore`]
#[derive(Debug)]
pub struct ScoreLedger {
    best: u32,
    store: Box<dyn ScoreStore>,
}

impl ScoreLedger {
    /// Read the best score from `store`, defaulting to 0 on failure
    pub fn load(store: impl ScoreStore + 'static) -> Self {
        let best = match store.read_best() {
            Ok(best) => {
                log::info!("Loaded best score {best}");
                best
            }
            Err(e) => {
                log::warn!("Could not read best score ({e}), starting from 0");
                0
            }
        };
        Self {
            best,
            store: Box::new(store),
        }
    }

    /// Best score known to this ledger
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Check if a score would set a new record
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a finished session's score. Returns true if it set a new record.
    pub fn record(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }

        self.best = score;
        match self.store.write_best(score) {
            Ok(()) => log::info!("New best score {score} saved"),
            Err(e) => log::warn!("New best score {score} not saved: {e}"),
        }
        true
    }
}
