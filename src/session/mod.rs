//! Game session: the public facade.
//!
//! `GameSession` composes the deck builder, turn machine, and score
//! tracker, and owns the injected collaborators:
//! - a `Scheduler` for the delayed turn transitions
//! - a `KeyValueStore` for the best score
//!
//! The presentation layer sends intents (`on_card_tap`, `on_restart`),
//! forwards fired timers (`on_timer`), and renders `view()`.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::cards::CardSet;
//! use memory_match::core::{GameConfig, Position};
//! use memory_match::session::GameSession;
//! use memory_match::storage::MemoryStore;
//! use memory_match::timer::TimerQueue;
//!
//! let cards = CardSet::from_names([("Only", "only.png")]).unwrap();
//! let mut session = GameSession::new(
//!     GameConfig::new().with_seed(1),
//!     cards,
//!     MemoryStore::new(),
//!     TimerQueue::new(),
//! )
//! .unwrap();
//!
//! session.on_card_tap(Position::new(0));
//! session.on_card_tap(Position::new(1));
//! session.advance(Duration::from_millis(300));
//!
//! let view = session.view();
//! assert!(view.show_completion_dialog);
//! assert_eq!(view.best_score.get(), Some(1));
//! ```

mod view;

pub use view::{CardView, CompletionNotice, ViewState};

use std::time::Duration;

use crate::cards::{build_deck, CardSet};
use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use crate::core::position::Position;
use crate::core::rng::{GameRng, GameRngState};
use crate::core::state::GameState;
use crate::rules::{TapOutcome, TimerOutcome, TurnMachine, TurnPhase};
use crate::scoring::{check_completion, BestScore, ScoreTracker};
use crate::storage::KeyValueStore;
use crate::timer::{Scheduler, TimerHandle, TimerQueue};

/// One player's game, from first deal through any number of restarts.
pub struct GameSession<K, S> {
    cards: CardSet,
    rng: GameRng,
    machine: TurnMachine,
    scheduler: S,
    scores: ScoreTracker<K>,
    completion: Option<CompletionNotice>,
}

impl<K: KeyValueStore, S: Scheduler> GameSession<K, S> {
    /// Start a session and deal the first game.
    ///
    /// The best score is read from `store` once, here.
    pub fn new(config: GameConfig, cards: CardSet, store: K, scheduler: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let deck = build_deck(&cards, &mut rng);
        let machine = TurnMachine::new(&config, deck);
        let scores = ScoreTracker::load(store, config.best_score_key.as_str());

        tracing::info!(pairs = cards.len(), seed = rng.seed(), "session started");

        Ok(Self {
            cards,
            rng,
            machine,
            scheduler,
            scores,
            completion: None,
        })
    }

    /// Player tapped a card.
    pub fn on_card_tap(&mut self, position: Position) -> TapOutcome {
        self.machine.tap(position, &mut self.scheduler)
    }

    /// A timer scheduled by this session fired.
    pub fn on_timer(&mut self, handle: TimerHandle) -> TimerOutcome {
        let outcome = self.machine.fire(handle, &mut self.scheduler);
        if let TimerOutcome::Matched(_) = outcome {
            self.check_completion();
        }
        outcome
    }

    /// Deal a new game. Valid at any time.
    pub fn on_restart(&mut self) {
        let deck = build_deck(&self.cards, &mut self.rng);
        self.machine.restart(deck, &mut self.scheduler);
        self.completion = None;
        tracing::info!("game restarted");
    }

    fn check_completion(&mut self) {
        let state = self.machine.state();
        let moves = state.move_count();
        let result = check_completion(state.cleared().len(), self.cards.len(), moves, self.scores.best());
        if !result.is_complete {
            return;
        }

        let best = self.scores.record(moves);
        debug_assert_eq!(best, result.new_best);
        tracing::info!(moves, %best, "game completed");
        self.completion = Some(CompletionNotice { moves, best });
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> ViewState {
        ViewState::build(self.machine.state(), &self.cards, self.scores.best(), self.completion)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.machine.state()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.machine.phase()
    }

    #[must_use]
    pub fn cards(&self) -> &CardSet {
        &self.cards
    }

    #[must_use]
    pub fn best_score(&self) -> BestScore {
        self.scores.best()
    }

    #[must_use]
    pub fn completion(&self) -> Option<CompletionNotice> {
        self.completion
    }

    /// RNG state; restoring it reproduces the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[must_use]
    pub fn store(&self) -> &K {
        self.scores.store()
    }
}

impl<K: KeyValueStore> GameSession<K, TimerQueue> {
    /// Move the virtual clock forward, firing every timer that comes due.
    ///
    /// Timers scheduled while handling a fired timer also fire if they fall
    /// inside the window.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerOutcome> {
        let deadline = self.scheduler.now() + by;
        let mut outcomes = Vec::new();
        while let Some(fired) = self.scheduler.pop_due(deadline) {
            outcomes.push(self.on_timer(fired.handle));
        }
        self.scheduler.advance_to(deadline);
        outcomes
    }

    /// Fire timers until none are pending.
    pub fn settle(&mut self) -> Vec<TimerOutcome> {
        let mut outcomes = Vec::new();
        while let Some(due) = self.scheduler.next_due() {
            let by = due.saturating_sub(self.scheduler.now());
            outcomes.extend(self.advance(by));
        }
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn session(seed: u64) -> GameSession<MemoryStore, TimerQueue> {
        GameSession::new(
            GameConfig::new().with_seed(seed),
            CardSet::reference(),
            MemoryStore::new(),
            TimerQueue::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_session() {
        let s = session(42);
        let view = s.view();

        assert_eq!(view.cards.len(), 12);
        assert_eq!(view.move_count, 0);
        assert_eq!(view.best_score, BestScore::NONE);
        assert!(!view.show_completion_dialog);
        assert_eq!(s.phase(), TurnPhase::Idle);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = GameSession::new(
            GameConfig::new().with_revert_delay_ms(0),
            CardSet::reference(),
            MemoryStore::new(),
            TimerQueue::new(),
        );
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_seed_reproduces_deal() {
        assert_eq!(session(7).state().deck(), session(7).state().deck());
    }

    #[test]
    fn test_advance_fires_eval_then_revert() {
        let mut s = session(42);
        let deck = s.state().deck().to_vec();
        let first = deck[0];
        let other = deck.iter().find(|c| c.card_type != first.card_type).unwrap();

        s.on_card_tap(first.position);
        s.on_card_tap(other.position);

        let outcomes = s.advance(Duration::from_millis(800));
        assert_eq!(outcomes, vec![TimerOutcome::Mismatched, TimerOutcome::Reverted]);
        assert!(s.view().open.is_empty());
        assert_eq!(s.scheduler().now(), Duration::from_millis(800));
    }

    #[test]
    fn test_restart_clears_completion() {
        let cards = CardSet::from_names([("Only", "only.png")]).unwrap();
        let mut s = GameSession::new(GameConfig::new().with_seed(1), cards, MemoryStore::new(), TimerQueue::new())
            .unwrap();

        s.on_card_tap(Position::new(0));
        s.on_card_tap(Position::new(1));
        s.settle();
        assert!(s.completion().is_some());

        s.on_restart();
        assert!(s.completion().is_none());
        assert_eq!(s.best_score(), BestScore::new(1));
        assert_eq!(s.store().get("bestScore").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_restart_deals_from_rng() {
        let mut s = session(3);
        let before = s.rng_state();
        s.on_restart();

        let mut replay = GameRng::from_state(&before);
        let expected = build_deck(s.cards(), &mut replay);
        assert_eq!(s.state().deck(), expected.as_slice());
    }
}
