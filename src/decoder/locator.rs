//! Berlekamp–Massey: recovering the connection polynomial of the
//! shortest linear recurrence satisfied by a sequence of power sums.
//!
//! This is classical LFSR synthesis, specialized to characteristic 2
//! (no sign flips, XOR in place of subtraction).

use crate::{field, poly::Polynomial};

// ======================================================================
// FUNCTIONS - PUBLIC

/// Computes the connection polynomial `C` of the shortest linear
/// recurrence satisfied by `s`: for all `n' >= deg(C)`,
/// `s[n'] + Σ_{i=1..deg(C)} C[i]·s[n'-i] = 0`.
///
/// `C[0]` is always `1`. `C`'s roots are the *reciprocals* of the
/// symmetric-difference elements; see [`decode`](super::decode) for
/// the reversal that turns `C` into the locator polynomial.
pub fn berlekamp_massey(s: &[field::FieldElement]) -> Polynomial {
    let mut current: Vec<field::FieldElement> = vec![1];
    let mut prev: Vec<field::FieldElement> = vec![1];
    let mut b: field::FieldElement = 1;
    let mut b_inv: Option<field::FieldElement> = Some(1);

    for n in 0..s.len() {
        let mut discrepancy = s[n];
        for (i, &c) in current.iter().enumerate().skip(1) {
            discrepancy = field::add(discrepancy, field::mul(s[n - i], c));
        }

        if discrepancy == 0 {
            continue;
        }

        let shift = (n + 1) as isize - (current.len() as isize - 1) - (prev.len() as isize - 1);
        debug_assert!(shift >= 1, "Berlekamp-Massey shift must be positive");
        let shift = shift as usize;

        let b_inv_val = *b_inv.get_or_insert_with(|| field::inv(b).expect("b is nonzero by invariant"));

        let swap = 2 * (current.len() - 1) <= n;
        let captured_current = if swap {
            let captured = current.clone();
            let needed = prev.len() + shift;
            if needed > current.len() {
                current.resize(needed, 0);
            }
            Some(captured)
        } else {
            None
        };

        let scale = field::mul(discrepancy, b_inv_val);
        for (i, &p) in prev.iter().enumerate() {
            current[i + shift] = field::add(current[i + shift], field::mul(p, scale));
        }

        if swap {
            prev = captured_current.expect("swap branch always captures current above");
            b = discrepancy;
            b_inv = None;
        }
    }

    Polynomial::new(current)
}

// ======================================================================
// TESTS
