//! Berlekamp-Massey error-locator solver
//!
//! ## Terms
//!
//! - `S` - syndrome sequence, `S[0]` first
//! - `D(x)` - current error-locator estimate (lambda)
//! - `C(x)` - correction polynomial
//! - `K` - 1-based iteration counter, runs up to the number of syndromes
//! - `L` - current LFSR length
//!
//! ## Iteration
//!
//! ```text
//! e = S[K-1] + sum(i = 1..=L) D[i] * S[K-1-i]
//! if e != 0:
//!     D*(x) = D(x) + e * C(x)
//!     if 2L < K:
//!         L = K - L
//!         C(x) = D(x) / e
//! C(x) = C(x) * x
//! if e != 0: D(x) = D*(x)
//! K = K + 1
//! ```
//!
//! `C(x)` starts as `x` rather than `1`. The shift at the end of every
//! iteration then lines it up with the textbook formulation, where the shift
//! happens before the update.

use crate::error::{RsError, RsResult};
use crate::galois::GaloisField;
use crate::poly::Polynomial;
use crate::types::ErrorLocator;
use log::trace;

/// Coefficients in an error-locator buffer for `check_symbols` syndromes
///
/// One less than the number of syndromes, but never below two so a single
/// error can still be located with two check symbols.
#[inline]
pub fn locator_len(check_symbols: usize) -> usize {
    check_symbols.saturating_sub(1).max(2)
}

/// Discrepancy `e` at iteration `k` (1-based) for LFSR length `l`
///
/// Terms past the end of `locator` are zero.
pub fn discrepancy(
    field: &GaloisField,
    locator: &[u16],
    syndromes: &[u16],
    k: usize,
    l: usize,
) -> RsResult<u16> {
    if k == 0 || k > syndromes.len() {
        return Err(RsError::IterationOutOfRange {
            k,
            syndromes: syndromes.len(),
        });
    }

    let upper = l.min(k - 1).min(locator.len().saturating_sub(1));

    Ok((1..=upper).fold(syndromes[k - 1], |e, i| {
        e ^ field.mul(locator[i], syndromes[k - 1 - i])
    }))
}

/// Outcome of one iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Iteration that was just run
    pub k: usize,
    pub discrepancy: u16,
    /// Whether `L` grew during this iteration
    pub length_changed: bool,
}

/// Steppable Berlekamp-Massey state over one syndrome sequence
#[derive(Debug, Clone)]
pub struct BerlekampMassey<'a> {
    field: &'a GaloisField,
    syndromes: &'a [u16],
    correction: Polynomial,
    locator: Polynomial,
    k: usize,
    l: usize,
}

impl<'a> BerlekampMassey<'a> {
    /// Start a solver with `D(x) = 1` and `C(x) = x`, both `poly_len` long
    ///
    /// `poly_len` must equal [`locator_len`] of the syndrome count.
    pub fn new(field: &'a GaloisField, syndromes: &'a [u16], poly_len: usize) -> RsResult<Self> {
        if syndromes.len() < 2 {
            return Err(RsError::TooFewCheckSymbols {
                check_symbols: syndromes.len(),
            });
        }
        let expected = locator_len(syndromes.len());
        if poly_len != expected {
            return Err(RsError::WrongLength {
                what: "Error-locator buffer",
                expected,
                actual: poly_len,
            });
        }

        Ok(Self {
            field,
            syndromes,
            correction: Polynomial::monomial(poly_len, 1),
            locator: Polynomial::one(poly_len),
            k: 1,
            l: 0,
        })
    }

    /// Next iteration to run
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn l(&self) -> usize {
        self.l
    }

    /// `C(x)`
    #[inline]
    pub fn correction(&self) -> &Polynomial {
        &self.correction
    }

    /// `D(x)`
    #[inline]
    pub fn locator(&self) -> &Polynomial {
        &self.locator
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.k > self.syndromes.len()
    }

    /// Run one iteration; `None` once every syndrome has been consumed
    pub fn step(&mut self) -> RsResult<Option<Step>> {
        if self.is_done() {
            return Ok(None);
        }

        let k = self.k;
        let e = discrepancy(
            self.field,
            self.locator.coefficients(),
            self.syndromes,
            k,
            self.l,
        )?;

        let mut length_changed = false;
        let updated = if e != 0 {
            let candidate = self.locator.add_scaled(self.field, &self.correction, e);
            if 2 * self.l < k {
                self.l = k - self.l;
                let e_inv = self.field.inverse(e)?;
                self.correction = self.locator.scaled(self.field, e_inv);
                length_changed = true;
            }
            Some(candidate)
        } else {
            None
        };

        self.correction.shift_up();
        if let Some(candidate) = updated {
            self.locator = candidate;
        }
        self.k += 1;

        trace!(
            "K={} e={} L={} D={:?} C={:?}",
            k,
            e,
            self.l,
            self.locator.coefficients(),
            self.correction.coefficients()
        );

        Ok(Some(Step {
            k,
            discrepancy: e,
            length_changed,
        }))
    }

    /// Run the remaining iterations and return `D(x)`
    pub fn finish(mut self) -> RsResult<ErrorLocator> {
        while self.step()?.is_some() {}
        Ok(ErrorLocator::new(self.locator, self.l))
    }
}

/// Error-locator polynomial for a syndrome sequence
pub fn error_locator(
    field: &GaloisField,
    syndromes: &[u16],
    poly_len: usize,
) -> RsResult<ErrorLocator> {
    BerlekampMassey::new(field, syndromes, poly_len)?.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galois::GF16_GENERATOR;

    fn gf16() -> GaloisField {
        GaloisField::new(16, GF16_GENERATOR).unwrap()
    }

    #[test]
    fn test_worked_discrepancy() {
        let gf = gf16();
        let d = [1, 11, 15];
        let s = [15, 3, 4, 12];
        assert_eq!(discrepancy(&gf, &d, &s, 4, 2), Ok(4));
    }

    #[test]
    fn test_discrepancy_ignores_terms_past_buffer() {
        let gf = gf16();
        let s = [15, 3, 4, 12];
        assert_eq!(
            discrepancy(&gf, &[1, 11], &s, 4, 3),
            Ok(12 ^ gf.mul(11, 4))
        );
    }

    #[test]
    fn test_initial_state() {
        let gf = gf16();
        let s = [0, 0, 0, 0];
        let bm = BerlekampMassey::new(&gf, &s, 3).unwrap();
        assert_eq!(bm.k(), 1);
        assert_eq!(bm.l(), 0);
        assert_eq!(bm.locator().coefficients(), &[1, 0, 0]);
        assert_eq!(bm.correction().coefficients(), &[0, 1, 0]);
    }

    #[test]
    fn test_first_step_with_nonzero_syndrome() {
        let gf = gf16();
        let s = [6, 0, 0, 0];
        let mut bm = BerlekampMassey::new(&gf, &s, 3).unwrap();
        let step = bm.step().unwrap().unwrap();

        assert_eq!(step.discrepancy, 6);
        assert!(step.length_changed);
        assert_eq!(bm.l(), 1);
        assert_eq!(bm.locator().coefficients(), &[1, 6, 0]);
        // C = D_old / e, shifted once
        let inv = gf.inverse(6).unwrap();
        assert_eq!(bm.correction().coefficients(), &[0, inv, 0]);
    }

    #[test]
    fn test_rejects_short_inputs() {
        let gf = gf16();
        assert_eq!(
            error_locator(&gf, &[1], 2).unwrap_err(),
            RsError::TooFewCheckSymbols { check_symbols: 1 }
        );
        assert!(matches!(
            error_locator(&gf, &[1, 2], 1),
            Err(RsError::WrongLength { .. })
        ));
    }

    #[test]
    fn test_locator_len() {
        assert_eq!(locator_len(2), 2);
        assert_eq!(locator_len(3), 2);
        assert_eq!(locator_len(4), 3);
        assert_eq!(locator_len(16), 15);
    }
}
