//! Completion and best-score tracking.
//!
//! ## Persistence
//!
//! The best score is one decimal integer stored under a fixed key. It is
//! read once when the tracker is built and rewritten on every completion.
//! Storage is best-effort: a missing, corrupt, or unreadable value starts
//! the tracker with no score, and a failed write keeps the in-memory value.
//! Neither is reported to the player.

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

/// Fewest moves over all completed games. `None` until the first completion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestScore(Option<u32>);

impl BestScore {
    /// No completed game yet.
    pub const NONE: BestScore = BestScore(None);

    #[must_use]
    pub const fn new(moves: u32) -> Self {
        Self(Some(moves))
    }

    #[must_use]
    pub const fn get(self) -> Option<u32> {
        self.0
    }

    /// Best of this score and a newly completed game.
    #[must_use]
    pub fn min_with(self, moves: u32) -> Self {
        match self.0 {
            Some(best) => Self(Some(best.min(moves))),
            None => Self(Some(moves)),
        }
    }

    /// Parse a stored value. Anything but a non-negative integer is `NONE`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().parse().ok())
    }
}

impl std::fmt::Display for BestScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(moves) => write!(f, "{}", moves),
            None => write!(f, "-"),
        }
    }
}

/// Result of a completion check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub is_complete: bool,
    /// Best score including this game if complete, else unchanged.
    pub new_best: BestScore,
}

/// Check whether every type is cleared and fold the move count into the best.
#[must_use]
pub fn check_completion(
    cleared: usize,
    total_types: usize,
    move_count: u32,
    current_best: BestScore,
) -> Completion {
    let is_complete = total_types > 0 && cleared == total_types;
    let new_best = if is_complete {
        current_best.min_with(move_count)
    } else {
        current_best
    };
    Completion { is_complete, new_best }
}

/// Best score backed by a key/value store.
#[derive(Debug)]
pub struct ScoreTracker<K> {
    store: K,
    key: String,
    best: BestScore,
}

impl<K: KeyValueStore> ScoreTracker<K> {
    /// Load the persisted best score from `store` under `key`.
    pub fn load(store: K, key: impl Into<String>) -> Self {
        let key = key.into();
        let best = match store.get(&key) {
            Ok(Some(raw)) => {
                let best = BestScore::parse(&raw);
                if best.get().is_none() {
                    tracing::warn!(%key, value = %raw, "ignoring unparsable best score");
                }
                best
            }
            Ok(None) => BestScore::NONE,
            Err(e) => {
                tracing::warn!(%key, error = %e, "could not read best score");
                BestScore::NONE
            }
        };
        tracing::debug!(%best, "best score loaded");
        Self { store, key, best }
    }

    #[must_use]
    pub fn best(&self) -> BestScore {
        self.best
    }

    /// Record a finished game and persist the resulting best.
    ///
    /// Returns the (possibly unchanged) best score.
    pub fn record(&mut self, move_count: u32) -> BestScore {
        let previous = self.best;
        self.best = previous.min_with(move_count);
        if self.best != previous {
            tracing::info!(best = %self.best, "new best score");
        }

        if let Some(best) = self.best.get() {
            if let Err(e) = self.store.set(&self.key, &best.to_string()) {
                tracing::warn!(key = %self.key, error = %e, "could not persist best score");
            }
        }
        self.best
    }

    /// The backing store.
    pub fn store(&self) -> &K {
        &self.store
    }
}
