//! Card instances - one dealt slot.
//!
//! A `CardInstance` is immutable once dealt. Whether it is face-up or
//! cleared is tracked by `GameState`, not by the instance.

use serde::{Deserialize, Serialize};

use super::definition::CardTypeId;
use crate::core::position::Position;

/// A card dealt into the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Type shared with exactly one other instance.
    pub card_type: CardTypeId,

    /// Slot in the deck.
    pub position: Position,
}

impl CardInstance {
    /// Create a card instance.
    #[must_use]
    pub const fn new(card_type: CardTypeId, position: Position) -> Self {
        Self { card_type, position }
    }

    /// Check whether two instances form a pair.
    ///
    /// A card never pairs with itself.
    #[must_use]
    pub fn pairs_with(&self, other: &CardInstance) -> bool {
        self.position != other.position && self.card_type == other.card_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_with() {
        let a0 = CardInstance::new(CardTypeId::new(0), Position::new(0));
        let a1 = CardInstance::new(CardTypeId::new(0), Position::new(3));
        let b = CardInstance::new(CardTypeId::new(1), Position::new(1));

        assert!(a0.pairs_with(&a1));
        assert!(a1.pairs_with(&a0));
        assert!(!a0.pairs_with(&b));
        assert!(!a0.pairs_with(&a0));
    }

    #[test]
    fn test_card_instance_serialization() {
        let instance = CardInstance::new(CardTypeId::new(2), Position::new(7));

        let json = serde_json::to_string(&instance).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(instance, deserialized);
    }
}
