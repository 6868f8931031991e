//! Deck building: two of every type, shuffled, positions assigned.

use super::definition::CardTypeId;
use super::instance::CardInstance;
use super::registry::CardSet;
use crate::core::position::Position;
use crate::core::rng::RandomSource;
use crate::core::shuffle::shuffle;

/// Deal a fresh deck from `set`.
///
/// The type list is concatenated with itself, shuffled, and positions
/// `0..2N` are assigned in shuffled order.
pub fn build_deck<R: RandomSource + ?Sized>(set: &CardSet, rng: &mut R) -> Vec<CardInstance> {
    let mut types: Vec<_> = set.ids().chain(set.ids()).collect();
    shuffle(&mut types, rng);

    let deck = lay_out(types);
    tracing::debug!(cards = deck.len(), "dealt deck");
    deck
}

/// Place `types` at positions `0, 1, 2, ...` in order.
///
/// Stops after the last addressable position; `CardSet` keeps every
/// dealt deck within that range.
pub fn lay_out<I>(types: I) -> Vec<CardInstance>
where
    I: IntoIterator<Item = CardTypeId>,
{
    (0..=u16::MAX)
        .map(Position::new)
        .zip(types)
        .map(|(position, card_type)| CardInstance::new(card_type, position))
        .collect()
}
