//! The compressed sketch: a fixed-length sequence of odd power sums.
//!
//! A [`Sketch`] of capacity `n` holds `s_0 .. s_{n-1}` where
//! `s_k = Σ_{m ∈ M} m^(2k+1)` for the multiset `M` it was built from.
//! Two sketches of equal capacity combine by element-wise XOR into the
//! sketch of the symmetric difference of their underlying sets.

use crate::{field, Error};

// ======================================================================
// Sketch - PUBLIC

/// A fixed-capacity set sketch: `n` field elements, the odd power sums
/// of the set it summarizes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sketch {
    elements: Vec<field::FieldElement>,
}

impl Sketch {
    /// Builds the sketch of `items` at the given `capacity`.
    ///
    /// Duplicate items cancel pairwise (an even number of occurrences
    /// of the same value contributes zero to every power sum).
    pub fn encode(items: &[field::FieldElement], capacity: usize) -> Self {
        let mut sketch = Self::empty(capacity);
        for &item in items {
            sketch.add_item(item);
        }
        sketch
    }

    /// An all-zero sketch of the given capacity, the sketch of the
    /// empty set.
    pub fn empty(capacity: usize) -> Self {
        Self {
            elements: vec![0; capacity],
        }
    }

    /// Folds one more item into this sketch in place, online-style:
    /// `O(capacity)` field multiplications, no reallocation.
    pub fn add_item(&mut self, item: field::FieldElement) {
        // s_k += item^(2k+1) for k = 0..capacity, computed incrementally:
        // power starts at item^1 and is multiplied by item^2 each step.
        let mut power = item;
        let square = field::mul(item, item);
        for s in &mut self.elements {
            *s = field::add(*s, power);
            power = field::mul(power, square);
        }
    }

    /// Combines two sketches of equal capacity by element-wise XOR,
    /// yielding the sketch of the symmetric difference of their
    /// underlying sets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityMismatch`] if `a` and `b` have
    /// different capacities.
    pub fn combine(a: &Self, b: &Self) -> Result<Self, Error> {
        if a.elements.len() != b.elements.len() {
            return Err(Error::CapacityMismatch {
                a: a.elements.len(),
                b: b.elements.len(),
            });
        }

        let elements = a
            .elements
            .iter()
            .zip(&b.elements)
            .map(|(&x, &y)| field::add(x, y))
            .collect();
        Ok(Self { elements })
    }

    /// Capacity `n` of this sketch.
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    /// The compressed odd power sums, `s_0 .. s_{n-1}`.
    pub fn as_slice(&self) -> &[field::FieldElement] {
        &self.elements
    }

    /// Encodes this sketch as `capacity` little-endian `u64`s,
    /// concatenated. Capacity itself is not carried in the bytes; it
    /// must be agreed out of band by the two peers.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.elements.len() * 8);
        for &e in &self.elements {
            bytes.extend_from_slice(&e.to_le_bytes());
        }
        bytes
    }

    /// Decodes a sketch from `bytes`, interpreted as concatenated
    /// little-endian `u64`s.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len()` is not a multiple of 8. This is a wire
    /// precondition enforced by the caller negotiating the capacity,
    /// not a condition this crate's own operations can trigger.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len() % 8, 0, "sketch byte length must be a multiple of 8");

        let elements = bytes
            .chunks_exact(8)
            .map(|chunk| u64::from_le_bytes(chunk.try_into().expect("chunk is exactly 8 bytes")))
            .collect();
        Self { elements }
    }
}

// ======================================================================
// TESTS
