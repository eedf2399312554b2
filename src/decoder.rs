//! Recovering the symmetric difference from an expanded sketch.
//!
//! Decoding is Berlekamp–Massey followed by root finding via the
//! Berlekamp Trace Algorithm, with one seam between them: BM's
//! connection polynomial has roots that are the *reciprocals* of the
//! symmetric-difference elements, so it is reversed into the true
//! locator polynomial before root finding.

mod locator;
mod roots;

use crate::{field, Error};

// ======================================================================
// FUNCTIONS - PUBLIC

/// Decodes an expanded (length `2n`) sketch, returning the elements of
/// the symmetric difference it encodes.
///
/// # Errors
///
/// Returns [`Error::DecodeFailed`] if the true symmetric difference
/// exceeds the sketch's capacity, so the locator polynomial produced by
/// Berlekamp-Massey fails to split completely over `GF(2^64)`.
pub fn decode(expanded: &[field::FieldElement]) -> Result<Vec<field::FieldElement>, Error> {
    let connection_polynomial = locator::berlekamp_massey(expanded);
    let locator_polynomial = connection_polynomial.reverse();
    roots::find_roots(&locator_polynomial)
}

// ======================================================================
// TESTS
