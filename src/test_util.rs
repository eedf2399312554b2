//! Shared helpers for this crate's own test suite.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ======================================================================
// FUNCTIONS - CRATE

/// Generates `count` distinct, nonzero field elements, seeded for
/// reproducibility across test runs.
pub(crate) fn generate_distinct_nonzero(count: usize, seed: u8) -> Vec<u64> {
    let mut rng = ChaCha8Rng::from_seed([seed; 32]);
    let mut items = Vec::with_capacity(count);

    while items.len() < count {
        let candidate: u64 = rng.gen();
        if candidate != 0 && !items.contains(&candidate) {
            items.push(candidate);
        }
    }
    items
}

/// Asserts that `actual` and `expected` contain the same elements,
/// ignoring order and duplicates.
pub(crate) fn assert_same_set(mut actual: Vec<u64>, expected: &[u64]) {
    actual.sort_unstable();
    let mut expected = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(actual, expected);
}

// ======================================================================
// TESTS

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_distinct_nonzero_has_no_duplicates_or_zeros() {
        let items = generate_distinct_nonzero(50, 7);
        assert_eq!(items.len(), 50);
        assert!(items.iter().all(|&x| x != 0));

        let mut sorted = items.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), items.len());
    }

    #[test]
    fn assert_same_set_ignores_order() {
        assert_same_set(vec![3, 1, 2], &[1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn assert_same_set_detects_mismatch() {
        assert_same_set(vec![1, 2], &[1, 2, 3]);
    }
}
