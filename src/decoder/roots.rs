//! Berlekamp Trace Algorithm (BTA): finding the roots of the locator
//! polynomial produced by Berlekamp–Massey, once reversed.
//!
//! BTA repeatedly splits a polynomial by computing `gcd(Tr_β(x) mod F,
//! F)` for a deterministic sequence of parameters `β = 1, 2, 4, 8,
//! ...`, recursing on each nontrivial factor until every factor is
//! linear.

use crate::{field, poly::Polynomial, Error};

// ======================================================================
// FUNCTIONS - PUBLIC

/// Finds the roots of `locator`, a monic polynomial presumed to have
/// all of its roots in `GF(2^64)`.
///
/// # Errors
///
/// Returns [`Error::DecodeFailed`] if `locator` does not split
/// completely over `GF(2^64)` within the algorithm's depth bound,
/// the expected outcome when the true symmetric difference exceeds
/// the sketch's capacity.
pub fn find_roots(locator: &Polynomial) -> Result<Vec<field::FieldElement>, Error> {
    let mut roots = Vec::new();
    rec_find_roots(locator.clone(), 1, 0, &mut roots)?;
    Ok(roots)
}

// ======================================================================
// FUNCTIONS - PRIVATE

/// One recursion level of BTA on factor `f`, with trial parameter
/// `beta` and accumulated recursion `depth`.
///
/// Verifies `f` is separable on this branch's own first trial, before
/// trusting any split found on that same trial.
fn rec_find_roots(
    f: Polynomial,
    mut beta: field::FieldElement,
    mut depth: u32,
    roots: &mut Vec<field::FieldElement>,
) -> Result<(), Error> {
    match f.degree() {
        None | Some(0) => return Ok(()),
        Some(1) => {
            roots.push(f.coeffs()[0]);
            return Ok(());
        }
        _ => {}
    }
    let deg_f = f.degree().expect("checked above: f has degree >= 2");

    let mut separable_known = false;
    let (g, quotient) = loop {
        let t = trace_mod(beta, &f);

        if !separable_known {
            let residual = Polynomial::rem(&Polynomial::add(&t.square(), &t), &f);
            if !residual.is_zero() {
                return Err(Error::DecodeFailed);
            }
            separable_known = true;
        }

        if !within_depth_bound(deg_f, depth) {
            return Err(Error::DecodeFailed);
        }
        depth += 1;

        let candidate = Polynomial::gcd(&t, &f);
        if let Some(deg_candidate) = candidate.degree() {
            if deg_candidate >= 1 && deg_candidate < deg_f {
                let g = candidate.monic().expect("nonzero, has degree >= 1");
                let (quotient, _) = Polynomial::div_rem(&f, &g);
                break (g, quotient);
            }
        }

        beta = field::mul(beta, 2);
    };

    rec_find_roots(quotient, beta, depth, roots)?;
    rec_find_roots(g, beta, depth, roots)
}

/// `Tr_β(x) mod F = Σ_{i=0..63} (β·x)^(2^i) mod F`, accumulated by
/// repeated squaring with `β·x` re-injected (not added: squaring
/// always zeroes the odd-index coefficient it occupies) each round.
fn trace_mod(beta: field::FieldElement, f: &Polynomial) -> Polynomial {
    let mut t = Polynomial::new(vec![0, beta]);

    for _ in 0..field::GF_BITS - 1 {
        let mut coeffs = t.square().coeffs().to_vec();
        if coeffs.len() < 2 {
            coeffs.resize(2, 0);
        }
        coeffs[1] = beta;
        t = Polynomial::rem(&Polynomial::new(coeffs), f);
    }
    t
}

/// Beyond this recursion depth, a non-split trace map no longer gives
/// any real chance of separating `F`'s roots.
fn within_depth_bound(deg_f: usize, depth: u32) -> bool {
    let shift = match field::GF_BITS.checked_sub(depth) {
        Some(shift) => shift,
        None => return false,
    };
    let threshold = 1u128 << shift;
    (deg_f as u128 - 1) < threshold
}

// ======================================================================
// TESTS
