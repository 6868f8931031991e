//! Core engine types: positions, state, RNG, shuffle, configuration, errors.
//!
//! These are the building blocks the turn machine and session are made of.

pub mod config;
pub mod error;
pub mod position;
pub mod rng;
pub mod shuffle;
pub mod state;

pub use config::GameConfig;
pub use error::{ConfigError, StorageError};
pub use position::Position;
pub use rng::{GameRng, GameRngState, RandomSource};
pub use shuffle::shuffle;
pub use state::{GameState, OpenPositions};
