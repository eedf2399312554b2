//! PinSketch: compact set-reconciliation sketches over `GF(2^64)`.
//!
//! Two parties each hold a set of 64-bit identifiers. Each computes a
//! sketch of a fixed capacity `n` with [`encode`]; the sketches
//! combine with [`combine`] (an element-wise field addition); and
//! either party can recover the symmetric difference of the two sets
//! from the combined sketch with [`expand`] followed by [`decode`],
//! provided the true symmetric difference has at most `n` elements.
//! The sketch's size is independent of how large the underlying sets
//! are: it depends only on the capacity `n` that both parties agreed
//! on ahead of time.
//!
//! ```
//! # fn main() -> Result<(), pinsketch::Error> {
//! let a = pinsketch::encode(&[2000, 3000, 5000], 12);
//! let b = pinsketch::encode(&[4000, 5000, 1000], 12);
//!
//! let combined = pinsketch::combine(&a, &b)?;
//! let mut difference = pinsketch::decode(&pinsketch::expand(&combined))?;
//! difference.sort_unstable();
//!
//! assert_eq!(difference, vec![1000, 2000, 3000, 4000]);
//! # Ok(())
//! # }
//! ```
//!
//! Hashing application-level items down to 64-bit field elements,
//! transporting sketches between peers, and persisting sets are all
//! out of scope, callers own those concerns. See the crate's
//! `DESIGN.md` for how this implementation is organized.

#![deny(missing_docs)]

use std::fmt;

pub use crate::sketch::Sketch;

mod decoder;
mod field;
mod frobenius;
mod poly;
mod sketch;

#[cfg(test)]
mod test_util;

// ======================================================================
// Error - PUBLIC

/// Represents all possible errors that can occur in this library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// [`combine`] was called on sketches of differing capacity.
    CapacityMismatch {
        /// Capacity of the first sketch.
        a: usize,
        /// Capacity of the second sketch.
        b: usize,
    },

    /// Attempted to invert the zero element of the field.
    InversionOfZero,

    /// Attempted monic normalization of the zero polynomial.
    MonicOfZeroPolynomial,

    /// The locator polynomial did not split completely over
    /// `GF(2^64)` within the algorithm's depth bound.
    ///
    /// This is the expected outcome when the true symmetric difference
    /// between the two sets exceeds the sketch's capacity; the caller
    /// should retry with a larger capacity.
    DecodeFailed,
}

// ======================================================================
// Error - IMPL DISPLAY

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CapacityMismatch { a, b } => {
                write!(f, "capacity mismatch: {} vs {}", a, b)
            }
            Error::InversionOfZero => write!(f, "attempted to invert zero"),
            Error::MonicOfZeroPolynomial => {
                write!(f, "attempted monic normalization of the zero polynomial")
            }
            Error::DecodeFailed => write!(
                f,
                "decode failed: locator polynomial did not split over GF(2^64) within the depth bound"
            ),
        }
    }
}

// ======================================================================
// Error - IMPL ERROR

impl std::error::Error for Error {}

// ======================================================================
// FUNCTIONS - PUBLIC

/// Builds the sketch of `items` at the given `capacity`.
///
/// See the [crate-level example](crate) for usage.
pub fn encode(items: &[u64], capacity: usize) -> Sketch {
    Sketch::encode(items, capacity)
}

/// Combines two sketches of equal capacity by element-wise field
/// addition, yielding the sketch of the symmetric difference of their
/// underlying sets.
///
/// # Errors
///
/// Returns [`Error::CapacityMismatch`] if `a` and `b` have different
/// capacities.
pub fn combine(a: &Sketch, b: &Sketch) -> Result<Sketch, Error> {
    Sketch::combine(a, b)
}

/// Expands a compressed sketch of `n` elements into the `2n` elements
/// [`decode`] needs, via the Frobenius endomorphism.
pub fn expand(sketch: &Sketch) -> Vec<u64> {
    frobenius::expand(sketch)
}

/// Decodes an expanded (length `2n`) sketch, returning the elements of
/// the symmetric difference it encodes.
///
/// # Errors
///
/// Returns [`Error::DecodeFailed`] if the true symmetric difference
/// exceeds the sketch's capacity.
pub fn decode(expanded: &[u64]) -> Result<Vec<u64>, Error> {
    decoder::decode(expanded)
}

// ======================================================================
// TESTS

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util;

    fn sorted(mut v: Vec<u64>) -> Vec<u64> {
        v.sort_unstable();
        v
    }

    // ============================================================
    // concrete scenarios

    #[test]
    fn scenario_disjoint_combine() {
        let a = encode(&[2000, 3000, 5000], 12);
        let b = encode(&[4000, 5000, 1000], 12);

        let combined = combine(&a, &b).unwrap();
        let roots = decode(&expand(&combined)).unwrap();

        assert_eq!(sorted(roots), vec![1000, 2000, 3000, 4000]);
    }

    #[test]
    fn scenario_self_reconciliation_is_empty() {
        let a = encode(&[5000, 3000, 2000], 3);
        let b = encode(&[5000, 3000, 2000], 3);

        let combined = combine(&a, &b).unwrap();
        assert!(combined.as_slice().iter().all(|&x| x == 0));
        assert!(decode(&expand(&combined)).unwrap().is_empty());
    }

    #[test]
    fn scenario_single_side_only() {
        let a = encode(&[5000, 3000, 2000], 3);
        let roots = decode(&expand(&a)).unwrap();
        assert_eq!(sorted(roots), vec![2000, 3000, 5000]);
    }

    #[test]
    fn scenario_overcapacity_fails() {
        let a = encode(&[1, 2, 3, 4, 5], 3);
        assert_eq!(decode(&expand(&a)), Err(Error::DecodeFailed));
    }

    // ============================================================
    // round-trip properties

    #[test]
    fn roundtrip_recovers_random_sets_up_to_capacity() {
        let capacity = 20;
        for seed in 0..8u8 {
            let items = test_util::generate_distinct_nonzero(capacity, seed);
            let sketch = encode(&items, capacity);
            let roots = decode(&expand(&sketch)).unwrap();
            test_util::assert_same_set(roots, &items);
        }
    }

    #[test]
    fn roundtrip_recovers_disjoint_union() {
        let capacity = 16;
        let a_items = test_util::generate_distinct_nonzero(6, 1);
        let b_items = test_util::generate_distinct_nonzero(6, 2);

        let a = encode(&a_items, capacity);
        let b = encode(&b_items, capacity);
        let combined = combine(&a, &b).unwrap();

        let mut expected = a_items;
        expected.extend(b_items);

        let roots = decode(&expand(&combined)).unwrap();
        test_util::assert_same_set(roots, &expected);
    }

    // ============================================================
    // boundary

    #[test]
    fn empty_set_encodes_to_all_zero_sketch() {
        let sketch = encode(&[], 5);
        assert!(sketch.as_slice().iter().all(|&x| x == 0));
        assert!(decode(&expand(&sketch)).unwrap().is_empty());
    }

    #[test]
    fn exactly_at_capacity_succeeds() {
        let items = [10u64, 20, 30, 40, 50];
        let a = encode(&items, 5);
        let roots = decode(&expand(&a)).unwrap();
        assert_eq!(sorted(roots), items.to_vec());
    }

    #[test]
    fn one_more_than_capacity_fails() {
        let items = [10u64, 20, 30, 40, 50, 60];
        let a = encode(&items, 5);
        assert_eq!(decode(&expand(&a)), Err(Error::DecodeFailed));
    }

    // ============================================================
    // combine

    #[test]
    fn combine_rejects_capacity_mismatch() {
        let a = encode(&[1], 4);
        let b = encode(&[1], 5);
        assert_eq!(combine(&a, &b), Err(Error::CapacityMismatch { a: 4, b: 5 }));
    }

    // ============================================================
    // Error::Display

    #[test]
    fn error_display_is_non_empty() {
        for err in [
            Error::CapacityMismatch { a: 1, b: 2 },
            Error::InversionOfZero,
            Error::MonicOfZeroPolynomial,
            Error::DecodeFailed,
        ] {
            assert!(!err.to_string().is_empty());
        }
    }
}
