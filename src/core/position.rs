//! Deck slot identification.
//!
//! Every dealt card sits at a `Position` in `[0, 2N)`. Positions are stable
//! for the lifetime of a deal and are the only identity used when
//! comparing cards; two cards of the same type are told apart by position.

use serde::{Deserialize, Serialize};

/// Index of a card slot in the dealt deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(pub u16);

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the slot index for indexing the deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this position exists in a deck of `deck_len` cards.
    #[must_use]
    pub const fn in_deck(self, deck_len: usize) -> bool {
        self.index() < deck_len
    }
}

impl From<u16> for Position {
    fn from(index: u16) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
