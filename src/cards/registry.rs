//! Card set for a session.
//!
//! The `CardSet` stores the unique card types a session deals from.
//! It is validated once at construction, so every deal built from it has
//! exactly two cards per type.

use rustc_hash::FxHashSet;

use super::definition::{CardType, CardTypeId};
use crate::core::error::ConfigError;

/// Most types a set may hold: every dealt card needs its own `Position`.
pub const MAX_CARD_TYPES: usize = (u16::MAX as usize + 1) / 2;

/// Validated, ordered set of unique card types.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{CardSet, CardType, CardTypeId};
///
/// let set = CardSet::new(vec![
///     CardType::new(CardTypeId::new(0), "A", "a.png"),
///     CardType::new(CardTypeId::new(1), "B", "b.png"),
/// ])
/// .unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get(CardTypeId::new(1)).unwrap().name, "B");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSet {
    types: Vec<CardType>,
}

impl CardSet {
    /// Create a card set.
    ///
    /// Rejects an empty list, a list longer than `MAX_CARD_TYPES`, and any
    /// list where two entries share an id or a name.
    pub fn new(types: Vec<CardType>) -> Result<Self, ConfigError> {
        if types.is_empty() {
            return Err(ConfigError::EmptyCardSet);
        }
        if types.len() > MAX_CARD_TYPES {
            return Err(ConfigError::TooManyCardTypes {
                max: MAX_CARD_TYPES,
                got: types.len(),
            });
        }

        {
            let mut ids = FxHashSet::default();
            let mut names = FxHashSet::default();
            for card in &types {
                if !ids.insert(card.id) || !names.insert(card.name.as_str()) {
                    return Err(ConfigError::DuplicateCardType {
                        id: card.id.raw(),
                        name: card.name.clone(),
                    });
                }
            }
        }

        Ok(Self { types })
    }

    /// Build a set from names and assets, assigning ids in order.
    pub fn from_names<I, N, A>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (N, A)>,
        N: Into<String>,
        A: Into<String>,
    {
        let types = (0..=u32::MAX)
            .map(CardTypeId::new)
            .zip(entries)
            .map(|(id, (name, asset))| CardType::new(id, name, asset))
            .collect();
        Self::new(types)
    }

    /// The six-card reference configuration.
    #[must_use]
    pub fn reference() -> Self {
        let types = [
            ("Pikachu", "images/Pickachu.png"),
            ("ButterFree", "images/ButterFree.jpeg"),
            ("Charmander", "images/Charmander.jpeg"),
            ("Squirtle", "images/Squirtle.jpeg"),
            ("Pidgetto", "images/Pidgetto.jpeg"),
            ("Bulbasaur", "images/Bulbasaur.jpeg"),
        ]
        .into_iter()
        .zip(0..)
        .map(|((name, asset), id)| CardType::new(CardTypeId::new(id), name, asset))
        .collect();

        Self { types }
    }

    /// Get a card type by ID.
    #[must_use]
    pub fn get(&self, id: CardTypeId) -> Option<&CardType> {
        self.types.iter().find(|t| t.id == id)
    }

    /// Check if a type ID is in the set.
    #[must_use]
    pub fn contains(&self, id: CardTypeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of unique types (N). The deck has 2N cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false for a constructed set; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over type IDs in configuration order.
    pub fn ids(&self) -> impl Iterator<Item = CardTypeId> + '_ {
        self.types.iter().map(|t| t.id)
    }

    /// Iterate over card types in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardType> {
        self.types.iter()
    }
}
