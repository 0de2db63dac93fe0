//! Seeded Fisher–Yates shuffle.
//!
//! The generator is constructed and seeded explicitly so a given seed always
//! produces the same permutation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shuffle a slice in place with the given generator.
///
/// Walks from the last position down, swapping each element with a uniformly
/// chosen element at or before it.
pub fn shuffle_in_place<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Build a seeded permutation of `0..len`.
pub fn shuffled_indices(len: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    shuffle_in_place(&mut indices, &mut rng);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_permutation() {
        assert_eq!(shuffled_indices(20, 7), shuffled_indices(20, 7));
    }

    #[test]
    fn output_is_a_permutation() {
        let mut indices = shuffled_indices(50, 3);
        indices.sort_unstable();
        assert_eq!(indices, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn short_inputs_are_untouched() {
        assert_eq!(shuffled_indices(0, 1), Vec::<usize>::new());
        assert_eq!(shuffled_indices(1, 1), vec![0]);
    }

    #[test]
    fn long_input_actually_moves() {
        // A 100-element identity permutation surviving a shuffle would mean
        // the swap loop never ran.
        assert_ne!(shuffled_indices(100, 1), (0..100).collect::<Vec<_>>());
    }
}
