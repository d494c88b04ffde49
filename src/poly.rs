//! Fixed-length polynomial buffers over a Galois field
//!
//! Coefficients are stored low degree first. The length is fixed when the
//! buffer is created; multiplying by `x` drops whatever falls off the top.

use crate::galois::GaloisField;

/// Polynomial with a fixed number of coefficients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<u16>,
}

impl Polynomial {
    /// The zero polynomial with `len` coefficients
    pub fn zeros(len: usize) -> Self {
        Self {
            coefficients: vec![0; len],
        }
    }

    /// The constant 1
    pub fn one(len: usize) -> Self {
        Self::monomial(len, 0)
    }

    /// x^degree; a zero polynomial if `degree` does not fit
    pub fn monomial(len: usize, degree: usize) -> Self {
        let mut poly = Self::zeros(len);
        if let Some(c) = poly.coefficients.get_mut(degree) {
            *c = 1;
        }
        poly
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    #[inline]
    pub fn coefficients(&self) -> &[u16] {
        &self.coefficients
    }

    pub fn into_vec(self) -> Vec<u16> {
        self.coefficients
    }

    /// Coefficient of x^i, zero past the end
    #[inline]
    pub fn coeff(&self, i: usize) -> u16 {
        self.coefficients.get(i).copied().unwrap_or(0)
    }

    /// Multiply by x in place
    pub fn shift_up(&mut self) {
        if self.coefficients.is_empty() {
            return;
        }
        self.coefficients.rotate_right(1);
        self.coefficients[0] = 0;
    }

    /// `scalar * self` as a new polynomial of the same length
    pub fn scaled(&self, field: &GaloisField, scalar: u16) -> Self {
        Self {
            coefficients: self
                .coefficients
                .iter()
                .map(|&c| field.table_mul(c, scalar))
                .collect(),
        }
    }

    /// `self + scalar * other`, truncated to this polynomial's length
    pub fn add_scaled(&self, field: &GaloisField, other: &Polynomial, scalar: u16) -> Self {
        Self {
            coefficients: self
                .coefficients
                .iter()
                .enumerate()
                .map(|(i, &c)| c ^ field.table_mul(scalar, other.coeff(i)))
                .collect(),
        }
    }

    /// Index of the highest nonzero coefficient; `None` for zero
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|&c| c != 0)
    }

    /// Number of nonzero coefficients
    pub fn weight(&self) -> usize {
        self.coefficients.iter().filter(|&&c| c != 0).count()
    }

    /// Evaluate at `x` with Horner's rule
    pub fn eval(&self, field: &GaloisField, x: u16) -> u16 {
        self.coefficients
            .iter()
            .rev()
            .fold(0, |acc, &c| field.table_mul(acc, x) ^ c)
    }
}

impl From<Vec<u16>> for Polynomial {
    fn from(coefficients: Vec<u16>) -> Self {
        Self { coefficients }
    }
}
