//! Game state: the single authoritative record of a deal in progress.
//!
//! ## GameState
//!
//! - Deck (stable for the deal)
//! - Open positions (face-up, unresolved; at most two)
//! - Cleared types (matched and retired; only grows)
//! - Move count and the input lock
//!
//! All mutation goes through `rules::TurnMachine`. Setters here are
//! crate-private; callers outside the crate read only.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::position::Position;
use crate::cards::{CardInstance, CardTypeId};

/// Face-up, unresolved positions.
pub type OpenPositions = SmallVec<[Position; 2]>;

/// Mutable state of one deal.
///
/// Uses an `im` persistent set for cleared types so view snapshots clone
/// in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    deck: Vec<CardInstance>,
    open: OpenPositions,
    cleared: ImHashSet<CardTypeId>,
    move_count: u32,
    input_locked: bool,
}

impl GameState {
    /// Create the state for a fresh deal.
    #[must_use]
    pub fn new(deck: Vec<CardInstance>) -> Self {
        Self {
            deck,
            open: SmallVec::new(),
            cleared: ImHashSet::new(),
            move_count: 0,
            input_locked: false,
        }
    }

    // === Reads ===

    /// The dealt deck, indexed by position.
    #[must_use]
    pub fn deck(&self) -> &[CardInstance] {
        &self.deck
    }

    /// Card at a position, if it exists.
    #[must_use]
    pub fn card(&self, position: Position) -> Option<&CardInstance> {
        self.deck.get(position.index())
    }

    /// Currently open positions, in the order they were opened.
    #[must_use]
    pub fn open(&self) -> &[Position] {
        &self.open
    }

    #[must_use]
    pub fn is_open(&self, position: Position) -> bool {
        self.open.contains(&position)
    }

    /// Types whose pair has been matched.
    #[must_use]
    pub fn cleared(&self) -> &ImHashSet<CardTypeId> {
        &self.cleared
    }

    #[must_use]
    pub fn is_cleared(&self, card_type: CardTypeId) -> bool {
        self.cleared.contains(&card_type)
    }

    /// Completed pair-attempts this deal.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// True while a just-opened pair is awaiting evaluation.
    #[must_use]
    pub fn input_locked(&self) -> bool {
        self.input_locked
    }

    /// Number of unique types in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.deck.len() / 2
    }

    // === Mutation (turn machine only) ===

    /// Open a single card, discarding any stale open cards.
    pub(crate) fn open_only(&mut self, position: Position) {
        self.open.clear();
        self.open.push(position);
    }

    /// Open the second card of a pair and count the move.
    pub(crate) fn open_second(&mut self, position: Position) {
        debug_assert_eq!(self.open.len(), 1, "second card opened without a first");
        self.open.push(position);
        self.move_count += 1;
    }

    pub(crate) fn close_all(&mut self) {
        self.open.clear();
    }

    pub(crate) fn clear_type(&mut self, card_type: CardTypeId) {
        self.cleared.insert(card_type);
    }

    pub(crate) fn set_input_locked(&mut self, locked: bool) {
        self.input_locked = locked;
    }

    /// The two open cards, if a pair is open.
    pub(crate) fn open_pair(&self) -> Option<(CardInstance, CardInstance)> {
        match self.open.as_slice() {
            [first, second] => Some((*self.card(*first)?, *self.card(*second)?)),
            _ => None,
        }
    }
}
