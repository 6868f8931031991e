//! Session integration tests: completion, best score, restart, persistence.

use std::time::Duration;

use memory_match::cards::{CardSet, CardTypeId};
use memory_match::core::{GameConfig, Position};
use memory_match::rules::{TapOutcome, TimerOutcome, TurnPhase};
use memory_match::scoring::BestScore;
use memory_match::session::GameSession;
use memory_match::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use memory_match::timer::TimerQueue;

type Session<K> = GameSession<K, TimerQueue>;

fn one_pair() -> CardSet {
    CardSet::from_names([("Only", "only.png")]).unwrap()
}

fn two_pairs() -> CardSet {
    CardSet::from_names([("A", "a.png"), ("B", "b.png")]).unwrap()
}

fn new_session<K: KeyValueStore>(cards: CardSet, store: K, seed: u64) -> Session<K> {
    GameSession::new(GameConfig::new().with_seed(seed), cards, store, TimerQueue::new()).unwrap()
}

/// Positions of each type in the current deal.
fn pairs<K: KeyValueStore>(session: &Session<K>) -> Vec<(Position, Position)> {
    session
        .cards()
        .ids()
        .map(|id| {
            let mut positions = session
                .state()
                .deck()
                .iter()
                .filter(|c| c.card_type == id)
                .map(|c| c.position);
            (positions.next().unwrap(), positions.next().unwrap())
        })
        .collect()
}

/// Play the current deal to completion, wasting `mismatches` moves first.
fn play<K: KeyValueStore>(session: &mut Session<K>, mismatches: u32) {
    let pairs = pairs(session);
    for _ in 0..mismatches {
        session.on_card_tap(pairs[0].0);
        session.on_card_tap(pairs[1].0);
        assert_eq!(session.settle(), vec![TimerOutcome::Mismatched, TimerOutcome::Reverted]);
    }
    for (first, second) in pairs {
        session.on_card_tap(first);
        session.on_card_tap(second);
        assert!(matches!(session.settle().as_slice(), [TimerOutcome::Matched(_)]));
    }
}

#[test]
fn test_single_pair_completes_in_one_move() {
    let mut session = new_session(one_pair(), MemoryStore::new(), 1);

    session.on_card_tap(Position::new(0));
    session.on_card_tap(Position::new(1));
    assert!(session.view().input_locked);

    session.advance(Duration::from_millis(300));

    let view = session.view();
    assert!(view.show_completion_dialog);
    assert_eq!(view.move_count, 1);
    assert_eq!(view.best_score, BestScore::new(1));
    let notice = view.completion.unwrap();
    assert_eq!(notice.moves, 1);
    assert_eq!(notice.best, BestScore::new(1));
    assert!(view.cards.iter().all(|c| c.is_inactive && !c.is_flipped));
}

#[test]
fn test_best_score_only_improves() {
    let mut session = new_session(two_pairs(), MemoryStore::new(), 9);

    play(&mut session, 0);
    assert_eq!(session.completion().unwrap().moves, 2);
    assert_eq!(session.best_score(), BestScore::new(2));

    // Worse game leaves the best alone
    session.on_restart();
    play(&mut session, 1);
    let notice = session.completion().unwrap();
    assert_eq!(notice.moves, 3);
    assert_eq!(notice.best, BestScore::new(2));
    assert_eq!(session.store().get("bestScore").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_better_game_lowers_best() {
    let store = MemoryStore::with_value("bestScore", "5");
    let mut session = new_session(two_pairs(), store, 9);
    assert_eq!(session.best_score(), BestScore::new(5));

    play(&mut session, 1);
    assert_eq!(session.best_score(), BestScore::new(3));
    assert_eq!(session.store().get("bestScore").unwrap().as_deref(), Some("3"));
}

#[test]
fn test_corrupt_stored_best_falls_back() {
    let store = MemoryStore::with_value("bestScore", "Infinity");
    let mut session = new_session(one_pair(), store, 1);
    assert_eq!(session.best_score(), BestScore::NONE);

    play(&mut session, 0);
    assert_eq!(session.best_score(), BestScore::new(1));
}

#[test]
fn test_custom_storage_key() {
    let config = GameConfig::new().with_seed(1).with_best_score_key("memory.best");
    let mut session =
        GameSession::new(config, one_pair(), MemoryStore::new(), TimerQueue::new()).unwrap();

    play(&mut session, 0);
    assert_eq!(session.store().get("memory.best").unwrap().as_deref(), Some("1"));
    assert_eq!(session.store().get("bestScore").unwrap(), None);
}

#[test]
fn test_best_score_survives_reload() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("scores.json");

    let mut first = new_session(two_pairs(), JsonFileStore::new(&path), 3);
    play(&mut first, 2);
    assert_eq!(first.best_score(), BestScore::new(4));
    drop(first);

    let second = new_session(two_pairs(), JsonFileStore::new(&path), 4);
    assert_eq!(second.best_score(), BestScore::new(4));
    assert_eq!(second.view().best_score.get(), Some(4));
}

#[test]
fn test_restart_from_any_state() {
    let mut session = new_session(CardSet::reference(), MemoryStore::new(), 11);
    let deal = pairs(&session);

    // Mid-evaluation
    session.on_card_tap(deal[0].0);
    session.on_card_tap(deal[1].0);
    session.on_restart();
    assert_restarted(&session);
    assert!(session.advance(Duration::from_secs(5)).is_empty());

    // Awaiting revert
    let deal = pairs(&session);
    session.on_card_tap(deal[0].0);
    session.on_card_tap(deal[1].0);
    session.advance(Duration::from_millis(300));
    assert_eq!(session.phase(), TurnPhase::AwaitingRevert);
    session.on_restart();
    assert_restarted(&session);

    // After clearing some pairs
    let deal = pairs(&session);
    session.on_card_tap(deal[2].0);
    session.on_card_tap(deal[2].1);
    session.settle();
    assert_eq!(session.view().cleared.len(), 1);
    session.on_restart();
    assert_restarted(&session);

    // Twice in a row
    session.on_restart();
    assert_restarted(&session);
}

fn assert_restarted<K: KeyValueStore>(session: &Session<K>) {
    let view = session.view();
    assert_eq!(view.move_count, 0);
    assert!(view.cleared.is_empty());
    assert!(view.open.is_empty());
    assert!(!view.input_locked);
    assert!(!view.show_completion_dialog);
    assert_eq!(view.cards.len(), 12);
    assert_eq!(session.scheduler().pending_count(), 0);
    assert_eq!(session.phase(), TurnPhase::Idle);
}

#[test]
fn test_cleared_cards_ignore_taps() {
    let mut session = new_session(two_pairs(), MemoryStore::new(), 5);
    let pairs = pairs(&session);

    session.on_card_tap(pairs[0].0);
    session.on_card_tap(pairs[0].1);
    session.settle();

    let view = session.view();
    assert!(view.is_inactive(CardTypeId::new(0)));
    assert!(matches!(session.on_card_tap(pairs[0].0), TapOutcome::Ignored(_)));
    assert_eq!(session.view(), view);
}

#[test]
fn test_view_tracks_flips() {
    let mut session = new_session(two_pairs(), MemoryStore::new(), 5);
    let pairs = pairs(&session);

    session.on_card_tap(pairs[0].0);
    let view = session.view();
    assert!(view.is_flipped(pairs[0].0));
    assert!(!view.is_flipped(pairs[0].1));
    assert_eq!(view.cards.iter().filter(|c| c.is_flipped).count(), 1);
}
