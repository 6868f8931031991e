//! Session configuration.
//!
//! Delays are tunable UI pacing, not correctness requirements:
//! - `evaluation_delay_ms`: time the second card stays visible before the
//!   pair is compared
//! - `revert_delay_ms`: time a mismatched pair stays visible before it
//!   flips back

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default evaluation delay (ms).
pub const DEFAULT_EVALUATION_DELAY_MS: u64 = 300;

/// Default mismatch revert delay (ms).
pub const DEFAULT_REVERT_DELAY_MS: u64 = 500;

/// Storage key for the persisted best score.
pub const DEFAULT_BEST_SCORE_KEY: &str = "bestScore";

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay between opening the second card and comparing the pair.
    pub evaluation_delay_ms: u64,

    /// Delay before a mismatched pair is turned face-down again.
    pub revert_delay_ms: u64,

    /// Key the best score is stored under.
    pub best_score_key: String,

    /// Seed for dealing. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            evaluation_delay_ms: DEFAULT_EVALUATION_DELAY_MS,
            revert_delay_ms: DEFAULT_REVERT_DELAY_MS,
            best_score_key: DEFAULT_BEST_SCORE_KEY.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a config with default delays and OS seeding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the evaluation delay.
    #[must_use]
    pub fn with_evaluation_delay_ms(mut self, ms: u64) -> Self {
        self.evaluation_delay_ms = ms;
        self
    }

    /// Set the mismatch revert delay.
    #[must_use]
    pub fn with_revert_delay_ms(mut self, ms: u64) -> Self {
        self.revert_delay_ms = ms;
        self
    }

    /// Set the storage key for the best score.
    #[must_use]
    pub fn with_best_score_key(mut self, key: impl Into<String>) -> Self {
        self.best_score_key = key.into();
        self
    }

    #[must_use]
    pub fn evaluation_delay(&self) -> Duration {
        Duration::from_millis(self.evaluation_delay_ms)
    }

    #[must_use]
    pub fn revert_delay(&self) -> Duration {
        Duration::from_millis(self.revert_delay_ms)
    }

    /// Check that the config can drive a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.evaluation_delay_ms == 0 {
            return Err(ConfigError::InvalidConfig("evaluation delay must be non-zero"));
        }
        if self.revert_delay_ms == 0 {
            return Err(ConfigError::InvalidConfig("revert delay must be non-zero"));
        }
        if self.best_score_key.is_empty() {
            return Err(ConfigError::InvalidConfig("best score key must not be empty"));
        }
        Ok(())
    }
}
