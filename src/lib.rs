//! # memory-match
//!
//! Game-state engine for a single-player memory-matching card game.
//!
//! A deck holding two of every card type is shuffled and dealt face-down.
//! Each turn the player reveals two cards; a matching pair is retired, a
//! mismatched pair flips back after a short delay. The engine counts moves
//! and keeps the best (lowest) move count across sessions.
//!
//! ## Design Principles
//!
//! 1. **Presentation-free**: The engine emits a `ViewState` and accepts
//!    intents. Rendering, animation and assets live elsewhere.
//!
//! 2. **Injected collaborators**: Randomness, timers and durable storage
//!    are traits (`RandomSource`, `Scheduler`, `KeyValueStore`), so every
//!    turn sequence can be replayed deterministically in tests.
//!
//! 3. **Explicit cancellation**: Delayed transitions are identified by
//!    handle. Restarting or interrupting a turn cancels them, and a handle
//!    the machine is no longer waiting for is ignored.
//!
//! ## Modules
//!
//! - `core`: Positions, game state, RNG, shuffle, configuration, errors
//! - `cards`: Card types, dealt instances, card sets, deck building
//! - `rules`: Turn state machine
//! - `timer`: Scheduler trait and virtual-clock queue
//! - `scoring`: Completion check and persisted best score
//! - `storage`: Key/value store port and implementations
//! - `session`: Public facade and view snapshot

pub mod core;
pub mod cards;
pub mod rules;
pub mod timer;
pub mod scoring;
pub mod storage;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, GameRngState, GameState, Position, RandomSource,
    StorageError,
};

pub use crate::cards::{
    build_deck, lay_out, AssetRef, CardInstance, CardSet, CardType, CardTypeId, MAX_CARD_TYPES,
};

pub use crate::rules::{IgnoreReason, TapOutcome, TimerOutcome, TurnMachine, TurnPhase};

pub use crate::timer::{FiredTimer, Scheduler, TimerHandle, TimerKind, TimerQueue};

pub use crate::scoring::{check_completion, BestScore, Completion, ScoreTracker};

pub use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};

pub use crate::session::{CardView, CompletionNotice, GameSession, ViewState};
