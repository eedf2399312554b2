//! The Frobenius lift: expanding `n` transmitted power sums to the `2n`
//! the decoder needs.
//!
//! Over `GF(2^k)`, `Σ m^(2j) = (Σ m^j)^2`: the even-indexed power sums
//! are just squares of earlier ones, so only the odd-indexed half needs
//! to cross the wire.

use crate::{field, sketch::Sketch};

// ======================================================================
// FUNCTIONS - PUBLIC

/// Expands a compressed sketch of `n` odd power sums `s_1, s_3, .. ,
/// s_{2n-1}` into the `2n` power sums `s_1, s_2, .. , s_{2n}` that
/// [`decode`](crate::decode) operates on.
///
/// `T[2j] = S[j]` and `T[2j+1] = T[j]^2`. The squaring term reuses an
/// *already expanded* slot, not the compressed input directly: `T[j]`
/// is itself `S[j/2]` or an earlier square, so this must be filled in
/// increasing index order, each slot depending only on slots below it.
pub fn expand(sketch: &Sketch) -> Vec<field::FieldElement> {
    let compressed = sketch.as_slice();
    let mut expanded = vec![0; 2 * compressed.len()];

    for i in 0..expanded.len() {
        expanded[i] = if i % 2 == 0 {
            compressed[i / 2]
        } else {
            field::mul(expanded[i / 2], expanded[i / 2])
        };
    }
    expanded
}

// ======================================================================
// TESTS
