//! Polynomial arithmetic over [`field`](crate::field).
//!
//! A [`Polynomial`] stores coefficients ascending: index `i` holds the
//! coefficient of `x^i`. Every operation below returns a freshly
//! normalized `Polynomial` (trailing zero coefficients trimmed) rather
//! than mutating its arguments in place.

use crate::{field, Error};

// ======================================================================
// Polynomial - PUBLIC

/// A polynomial over `GF(2^64)`, coefficients stored ascending by
/// degree.
///
/// The zero polynomial is represented by an empty coefficient vector
/// and has degree `None`. Every `Polynomial` returned by a function in
/// this module is normalized: its last coefficient, if any, is
/// nonzero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    coeffs: Vec<field::FieldElement>,
}

impl Polynomial {
    /// Creates a new, normalized [`Polynomial`] from ascending
    /// coefficients, trimming any trailing zero coefficients.
    pub fn new(mut coeffs: Vec<field::FieldElement>) -> Self {
        while coeffs.last() == Some(&0) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    /// Degree of this polynomial, or `None` if it is the zero
    /// polynomial.
    pub fn degree(&self) -> Option<usize> {
        if self.coeffs.is_empty() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    /// Returns `true` if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficients, ascending by degree. `coeffs()[i]` is the
    /// coefficient of `x^i`.
    pub fn coeffs(&self) -> &[field::FieldElement] {
        &self.coeffs
    }

    /// Leading (highest-degree) coefficient, or `None` for the zero
    /// polynomial.
    pub fn leading_coefficient(&self) -> Option<field::FieldElement> {
        self.coeffs.last().copied()
    }

    /// Returns a new polynomial scaled so its leading coefficient is
    /// `1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MonicOfZeroPolynomial`] if `self` is the zero
    /// polynomial.
    pub fn monic(&self) -> Result<Self, Error> {
        let leading = self.leading_coefficient().ok_or(Error::MonicOfZeroPolynomial)?;
        if leading == 1 {
            return Ok(self.clone());
        }

        let inv_leading = field::inv(leading).expect("leading coefficient is nonzero");
        let coeffs = self.coeffs.iter().map(|&c| field::mul(c, inv_leading)).collect();
        Ok(Self::new(coeffs))
    }

    /// Coefficient-wise sum of two polynomials (`XOR`, since addition
    /// in `GF(2^64)` is `XOR` and there is no carry between terms).
    pub fn add(a: &Self, b: &Self) -> Self {
        let len = a.coeffs.len().max(b.coeffs.len());
        let mut coeffs = vec![0; len];
        for (i, c) in coeffs.iter_mut().enumerate() {
            let from_a = a.coeffs.get(i).copied().unwrap_or(0);
            let from_b = b.coeffs.get(i).copied().unwrap_or(0);
            *c = field::add(from_a, from_b);
        }
        Self::new(coeffs)
    }

    /// `(Σ a_i x^i)^2 = Σ field_square(a_i) x^(2i)`.
    ///
    /// Squaring in characteristic 2 "spreads" each coefficient to an
    /// even index and leaves odd indices zero.
    pub fn square(&self) -> Self {
        if self.coeffs.is_empty() {
            return Self::zero();
        }

        let mut coeffs = vec![0; 2 * self.coeffs.len() - 1];
        for (i, &c) in self.coeffs.iter().enumerate() {
            coeffs[2 * i] = field::mul(c, c);
        }
        Self::new(coeffs)
    }

    /// Reduces `val` modulo the monic polynomial `modulus`, returning
    /// the remainder (degree `< deg(modulus)`).
    ///
    /// If `deg(val) < deg(modulus)`, `val` is returned unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is not monic and nonzero. This is a
    /// contract on callers within this crate, not a condition a
    /// PinSketch caller can trigger.
    pub fn rem(val: &Self, modulus: &Self) -> Self {
        assert_eq!(modulus.leading_coefficient(), Some(1), "modulus must be monic");

        let m = modulus.coeffs.len();
        if val.coeffs.len() < m {
            return val.clone();
        }

        let mut buf = val.coeffs.clone();
        while buf.len() >= m {
            let term = buf.pop().expect("buf.len() >= m >= 1");
            if term != 0 {
                let base = buf.len() + 1 - m;
                for x in 0..m - 1 {
                    buf[base + x] = field::add(buf[base + x], field::mul(term, modulus.coeffs[x]));
                }
            }
        }
        Self::new(buf)
    }

    /// Divides `val` by the monic polynomial `modulus`, returning
    /// `(quotient, remainder)` with `val = quotient * modulus +
    /// remainder` and `deg(remainder) < deg(modulus)`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is not monic and nonzero.
    pub fn div_rem(val: &Self, modulus: &Self) -> (Self, Self) {
        assert_eq!(modulus.leading_coefficient(), Some(1), "modulus must be monic");

        let m = modulus.coeffs.len();
        if val.coeffs.len() < m {
            return (Self::zero(), val.clone());
        }

        let mut buf = val.coeffs.clone();
        let mut quotient = vec![0; buf.len() - m + 1];
        while buf.len() >= m {
            let term = buf.pop().expect("buf.len() >= m >= 1");
            let index = buf.len() + 1 - m;
            quotient[index] = term;
            if term != 0 {
                let base = index;
                for x in 0..m - 1 {
                    buf[base + x] = field::add(buf[base + x], field::mul(modulus.coeffs[x], term));
                }
            }
        }
        (Self::new(quotient), Self::new(buf))
    }

    /// Monic greatest common divisor of `a` and `b`, via the Euclidean
    /// algorithm with monic reductions.
    pub fn gcd(a: &Self, b: &Self) -> Self {
        let (mut a, mut b) = if a.coeffs.len() < b.coeffs.len() {
            (b.clone(), a.clone())
        } else {
            (a.clone(), b.clone())
        };

        while !b.is_zero() {
            if b.coeffs.len() == 1 {
                // `b` is a nonzero constant: `a` and `b` are coprime.
                return Self::one();
            }

            let b_monic = b.monic().expect("b is nonzero, checked above");
            let remainder = Self::rem(&a, &b_monic);
            a = b_monic;
            b = remainder;
        }
        a
    }

    /// Reverses this polynomial's coefficients, returning its
    /// reciprocal `x^deg(self) * self(1/x)`.
    ///
    /// Valid only when `self` is already normalized (no non-essential
    /// trailing zeros), which every [`Polynomial`] produced by this
    /// module is.
    pub fn reverse(&self) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs.reverse();
        Self::new(coeffs)
    }
}

// ======================================================================
// TESTS
