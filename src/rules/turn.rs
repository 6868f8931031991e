//! Turn resolution.
//!
//! `TurnMachine` owns the `GameState` and the handles of its outstanding
//! timers. Taps and fired timers are the only inputs:
//!
//! ```text
//!   Idle ──tap──▶ OneOpen ──tap──▶ PendingEvaluation ──Evaluate──▶ Idle (match)
//!    ▲                                     │
//!    │                                     └──Evaluate──▶ AwaitingRevert
//!    └──────────────Revert─────────────────────────────────────┘
//! ```
//!
//! A tap during `AwaitingRevert` cancels the revert and starts a new turn
//! with only the tapped card open.

use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, CardTypeId};
use crate::core::config::GameConfig;
use crate::core::position::Position;
use crate::core::state::GameState;
use crate::timer::{Scheduler, TimerHandle, TimerKind};

/// Conceptual turn phase, derived from state and pending timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No card open.
    Idle,
    /// One card open, waiting for the second.
    OneOpen,
    /// Two cards open, input locked, evaluation scheduled.
    PendingEvaluation,
    /// Mismatched pair still shown, input unlocked, revert scheduled.
    AwaitingRevert,
}

/// Why a tap was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card at that position.
    OutOfRange,
    /// Card is already face-up.
    AlreadyOpen,
    /// Card's pair has been matched.
    Cleared,
    /// A pair is being evaluated.
    InputLocked,
}

/// Result of a tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapOutcome {
    /// Tap had no effect.
    Ignored(IgnoreReason),
    /// First card of a turn opened.
    Opened(Position),
    /// Second card opened; evaluation scheduled.
    PairOpened { first: Position, second: Position },
}

/// Result of a fired timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerOutcome {
    /// Open pair matched and its type was cleared.
    Matched(CardTypeId),
    /// Open pair did not match; revert scheduled.
    Mismatched,
    /// Mismatched pair turned face-down.
    Reverted,
    /// Timer was not one the machine is waiting for.
    Stale,
}

/// Authoritative turn state machine for one session.
#[derive(Clone, Debug)]
pub struct TurnMachine {
    state: GameState,
    evaluation_delay: std::time::Duration,
    revert_delay: std::time::Duration,
    pending_evaluation: Option<TimerHandle>,
    pending_revert: Option<TimerHandle>,
}

impl TurnMachine {
    /// Start a machine on a freshly dealt deck.
    #[must_use]
    pub fn new(config: &GameConfig, deck: Vec<CardInstance>) -> Self {
        Self {
            state: GameState::new(deck),
            evaluation_delay: config.evaluation_delay(),
            revert_delay: config.revert_delay(),
            pending_evaluation: None,
            pending_revert: None,
        }
    }

    /// Read-only view of the game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match self.state.open().len() {
            0 => TurnPhase::Idle,
            1 => TurnPhase::OneOpen,
            _ if self.pending_evaluation.is_some() => TurnPhase::PendingEvaluation,
            _ => TurnPhase::AwaitingRevert,
        }
    }

    /// Handle of the outstanding evaluation timer.
    #[must_use]
    pub fn pending_evaluation(&self) -> Option<TimerHandle> {
        self.pending_evaluation
    }

    /// Handle of the outstanding revert timer.
    #[must_use]
    pub fn pending_revert(&self) -> Option<TimerHandle> {
        self.pending_revert
    }

    /// Check whether a tap at `position` would be ignored.
    #[must_use]
    pub fn check_tap(&self, position: Position) -> Option<IgnoreReason> {
        let Some(card) = self.state.card(position) else {
            return Some(IgnoreReason::OutOfRange);
        };
        if self.state.input_locked() {
            Some(IgnoreReason::InputLocked)
        } else if self.state.is_open(position) {
            Some(IgnoreReason::AlreadyOpen)
        } else if self.state.is_cleared(card.card_type) {
            Some(IgnoreReason::Cleared)
        } else {
            None
        }
    }

    /// Player tapped the card at `position`.
    pub fn tap<S: Scheduler + ?Sized>(&mut self, position: Position, scheduler: &mut S) -> TapOutcome {
        if let Some(reason) = self.check_tap(position) {
            tracing::trace!(%position, ?reason, "tap ignored");
            return TapOutcome::Ignored(reason);
        }

        match self.phase() {
            TurnPhase::OneOpen => {
                let first = self.state.open()[0];
                self.state.open_second(position);
                self.state.set_input_locked(true);
                self.pending_evaluation =
                    Some(scheduler.schedule_after(self.evaluation_delay, TimerKind::Evaluate));

                tracing::debug!(%first, second = %position, moves = self.state.move_count(), "pair opened");
                TapOutcome::PairOpened { first, second: position }
            }
            TurnPhase::Idle | TurnPhase::AwaitingRevert => {
                if let Some(handle) = self.pending_revert.take() {
                    scheduler.cancel(handle);
                    tracing::debug!(%handle, "revert interrupted");
                }
                self.state.open_only(position);

                tracing::debug!(%position, "card opened");
                TapOutcome::Opened(position)
            }
            // Unreachable: check_tap rejects while locked
            TurnPhase::PendingEvaluation => TapOutcome::Ignored(IgnoreReason::InputLocked),
        }
    }

    /// A scheduled timer fired.
    pub fn fire<S: Scheduler + ?Sized>(&mut self, handle: TimerHandle, scheduler: &mut S) -> TimerOutcome {
        if self.pending_evaluation == Some(handle) {
            self.pending_evaluation = None;
            self.evaluate(scheduler)
        } else if self.pending_revert == Some(handle) {
            self.pending_revert = None;
            self.state.close_all();
            tracing::debug!("mismatched pair reverted");
            TimerOutcome::Reverted
        } else {
            tracing::trace!(%handle, "stale timer ignored");
            TimerOutcome::Stale
        }
    }

    fn evaluate<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> TimerOutcome {
        self.state.set_input_locked(false);

        let Some((first, second)) = self.state.open_pair() else {
            // Evaluation is only scheduled with a pair open
            self.state.close_all();
            return TimerOutcome::Stale;
        };

        if first.pairs_with(&second) {
            self.state.clear_type(first.card_type);
            self.state.close_all();
            tracing::debug!(card_type = %first.card_type, cleared = self.state.cleared().len(), "pair matched");
            TimerOutcome::Matched(first.card_type)
        } else {
            self.pending_revert = Some(scheduler.schedule_after(self.revert_delay, TimerKind::Revert));
            tracing::debug!(first = %first.position, second = %second.position, "pair mismatched");
            TimerOutcome::Mismatched
        }
    }

    /// Cancel outstanding timers and start over on `deck`.
    pub fn restart<S: Scheduler + ?Sized>(&mut self, deck: Vec<CardInstance>, scheduler: &mut S) {
        for handle in [self.pending_evaluation.take(), self.pending_revert.take()]
            .into_iter()
            .flatten()
        {
            scheduler.cancel(handle);
        }
        self.state = GameState::new(deck);
        tracing::debug!(cards = self.state.deck().len(), "turn machine restarted");
    }
}
