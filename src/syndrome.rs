//! Syndrome calculation
//!
//! The received word is read as a polynomial with `message[i]` the coefficient
//! of x^i. Syndrome `S_i` is that polynomial evaluated at x^(i+1), matching a
//! generator polynomial whose roots start at the first power of the primitive
//! element: g(x) = (x + a^1)(x + a^2)...

use crate::galois::GaloisField;

/// Evaluate `message` at `root` using Horner's rule
pub fn calc_syndrome(field: &GaloisField, message: &[u16], root: u16) -> u16 {
    let Some((&constant, rest)) = message.split_first() else {
        return 0;
    };

    let mut syndrome = 0;
    for &coefficient in rest.iter().rev() {
        syndrome = field.table_mul(syndrome ^ coefficient, root);
    }

    syndrome ^ constant
}

/// Syndromes of one received word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syndromes {
    values: Vec<u16>,
}

impl Syndromes {
    /// Compute the first `count` syndromes of `message`
    pub fn compute(field: &GaloisField, message: &[u16], count: usize) -> Self {
        let values = (1..=count)
            .map(|power| calc_syndrome(field, message, field.alpha_pow(power)))
            .collect();
        Self { values }
    }

    /// True when every syndrome is zero, i.e. the word is a codeword
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&s| s == 0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<u16> {
        self.values
    }
}

impl From<Vec<u16>> for Syndromes {
    fn from(values: Vec<u16>) -> Self {
        Self { values }
    }
}
