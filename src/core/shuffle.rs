//! Fisher–Yates shuffle over any `RandomSource`.

use super::rng::RandomSource;

/// Shuffle a slice in place.
///
/// Walks `i` from `len` down to 1, swapping slot `i - 1` with a uniformly
/// chosen slot in `[0, i)`. Every permutation is reachable with equal
/// probability given a uniform source. Slices of length 0 or 1 are left
/// untouched and draw nothing from `rng`.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..=items.len()).rev() {
        let j = rng.gen_index(i);
        items.swap(i - 1, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    /// Source that replays a fixed script of indices.
    struct Scripted(Vec<usize>);

    impl RandomSource for Scripted {
        fn gen_index(&mut self, bound: usize) -> usize {
            let next = self.0.remove(0);
            assert!(next < bound);
            next
        }
    }

    #[test]
    fn test_shuffle_permutes() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        shuffle(&mut data, &mut rng);

        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_empty_and_singleton() {
        let mut rng = GameRng::new(1);

        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec!['x'];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec!['x']);
    }

    #[test]
    fn test_swap_order() {
        // i=3 picks 0: [c, b, a]; i=2 picks 0: [b, c, a]; i=1 picks 0: no-op
        let mut data = vec!['a', 'b', 'c'];
        shuffle(&mut data, &mut Scripted(vec![0, 0, 0]));
        assert_eq!(data, vec!['b', 'c', 'a']);
    }

    #[test]
    fn test_identity_script() {
        // Picking j = i - 1 every step swaps each slot with itself
        let mut data = vec![1, 2, 3, 4];
        shuffle(&mut data, &mut Scripted(vec![3, 2, 1, 0]));
        assert_eq!(data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_every_permutation_reachable() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        let mut rng = GameRng::new(3);
        for _ in 0..500 {
            let mut data = [0u8, 1, 2];
            shuffle(&mut data, &mut rng);
            seen.insert(data);
        }
        assert_eq!(seen.len(), 6);
    }
}
