//! Randomness for dealing.
//!
//! ## Key Features
//!
//! - **Pluggable**: the shuffler only needs a `RandomSource`
//! - **Deterministic**: same seed produces the same deal
//! - **Serializable**: O(1) state capture and restore, so a deal can be replayed
//!
//! ```
//! use memory_match::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_index(52), b.gen_index(52));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Uniform integer generator consumed by the shuffler.
pub trait RandomSource {
    /// Return a uniformly distributed index in `[0, bound)`.
    ///
    /// `bound` is always at least 1 when called by the shuffler.
    fn gen_index(&mut self, bound: usize) -> usize;
}

/// Seeded RNG used for dealing.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Serializable RNG state for replaying a deal.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of
/// how many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(1000), rng2.gen_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_index_in_bounds() {
        let mut rng = GameRng::new(9);
        for bound in 1..50 {
            assert!(rng.gen_index(bound) < bound);
        }
        assert_eq!(rng.gen_index(1), 0);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.gen_index(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_index(1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_index(1000)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
