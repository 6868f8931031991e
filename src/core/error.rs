//! Error types.
//!
//! Invalid taps are not errors; see `rules::IgnoreReason`. The only
//! caller-visible failure is a configuration that cannot be dealt.
//! Storage errors are produced by stores but absorbed by the score tracker.

use std::io;

/// Configuration rejected before any deal is made.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("card set is empty")]
    EmptyCardSet,
    #[error("duplicate card type {name:?} (id {id})")]
    DuplicateCardType { id: u32, name: String },
    #[error("too many card types: {got} (max {max})")]
    TooManyCardTypes { max: usize, got: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

/// Failure reading or writing the durable key/value store.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
