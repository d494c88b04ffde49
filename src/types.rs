//! Types and structures for decode results

use crate::poly::Polynomial;
use crate::syndrome::Syndromes;

/// Error-locator polynomial produced by Berlekamp-Massey
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocator {
    polynomial: Polynomial,
    register_length: usize,
}

impl ErrorLocator {
    pub fn new(polynomial: Polynomial, register_length: usize) -> Self {
        Self {
            polynomial,
            register_length,
        }
    }

    /// Coefficients, constant term first
    #[inline]
    pub fn coefficients(&self) -> &[u16] {
        self.polynomial.coefficients()
    }

    #[inline]
    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// Degree of the locator; `None` only for a degenerate zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.polynomial.degree()
    }

    /// Final LFSR length `L` of the iteration
    #[inline]
    pub fn register_length(&self) -> usize {
        self.register_length
    }

    /// Number of errors the locator claims (its degree)
    pub fn error_count(&self) -> usize {
        self.degree().unwrap_or(0)
    }

    /// True when the locator is the constant 1 (no errors detected)
    pub fn is_trivial(&self) -> bool {
        self.degree() == Some(0) && self.polynomial.coeff(0) == 1
    }

    pub fn into_vec(self) -> Vec<u16> {
        self.polynomial.into_vec()
    }
}

/// Result of decoding one received word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutput {
    pub syndromes: Syndromes,
    pub locator: ErrorLocator,
}

impl DecodeOutput {
    /// No syndrome is nonzero
    pub fn is_error_free(&self) -> bool {
        self.syndromes.is_zero()
    }

    /// More errors than the syndromes can locate
    ///
    /// Either `2L` exceeds the number of syndromes or the locator degree
    /// disagrees with `L`. The locator is meaningless when this holds.
    pub fn exceeds_capacity(&self) -> bool {
        let check_symbols = self.syndromes.len();
        2 * self.locator.register_length() > check_symbols
            || self.locator.error_count() != self.locator.register_length()
    }
}
