//! Read-only view snapshot for the presentation layer.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{AssetRef, CardSet, CardTypeId};
use crate::core::position::Position;
use crate::core::state::GameState;
use crate::scoring::BestScore;

/// One card as the presentation layer should draw it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub position: Position,
    pub card_type: CardTypeId,
    pub name: String,
    pub asset: AssetRef,
    /// Face-up.
    pub is_flipped: bool,
    /// Matched and retired.
    pub is_inactive: bool,
}

/// Shown once every pair is cleared, until the next restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionNotice {
    /// Moves taken this game.
    pub moves: u32,
    /// Best score after this game.
    pub best: BestScore,
}

/// Everything needed to render the board, recomputed after each mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub cards: Vec<CardView>,
    pub open: Vec<Position>,
    pub cleared: ImHashSet<CardTypeId>,
    pub input_locked: bool,
    pub move_count: u32,
    pub best_score: BestScore,
    pub show_completion_dialog: bool,
    pub completion: Option<CompletionNotice>,
}

impl ViewState {
    pub(crate) fn build(
        state: &GameState,
        cards: &CardSet,
        best_score: BestScore,
        completion: Option<CompletionNotice>,
    ) -> Self {
        let card_views = state
            .deck()
            .iter()
            .map(|card| {
                // Deck is always dealt from this set
                let (name, asset) = cards
                    .get(card.card_type)
                    .map(|t| (t.name.clone(), t.asset.clone()))
                    .unwrap_or_else(|| (card.card_type.to_string(), AssetRef::new("")));
                CardView {
                    position: card.position,
                    card_type: card.card_type,
                    name,
                    asset,
                    is_flipped: state.is_open(card.position),
                    is_inactive: state.is_cleared(card.card_type),
                }
            })
            .collect();

        Self {
            cards: card_views,
            open: state.open().to_vec(),
            cleared: state.cleared().clone(),
            input_locked: state.input_locked(),
            move_count: state.move_count(),
            best_score,
            show_completion_dialog: completion.is_some(),
            completion,
        }
    }

    /// Card at `position` is face-up.
    #[must_use]
    pub fn is_flipped(&self, position: Position) -> bool {
        self.open.contains(&position)
    }

    /// Cards of `card_type` are matched and retired.
    #[must_use]
    pub fn is_inactive(&self, card_type: CardTypeId) -> bool {
        self.cleared.contains(&card_type)
    }
}
