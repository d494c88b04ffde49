//! Galois Field GF(2^m) arithmetic for Reed-Solomon decoding
//!
//! A [`GaloisField`] is built once from its order and generator polynomial and
//! is read-only afterwards, so a single instance can back any number of
//! concurrent decode calls.
//!
//! ## Generator polynomials
//!
//! The generator is encoded as an integer whose bit `i` is the coefficient of
//! `x^i`. It must have degree `m` for GF(2^m) and must be primitive: the powers
//! of `x` have to run through every nonzero element before returning to 1.
//! Construction rejects anything else instead of producing a broken field.
//!
//! Well-known choices:
//!
//! - **GF(2^4)**: 0x13 (x⁴ + x + 1)
//! - **GF(2^8)**: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
//! - **GF(2^16)**: 0x1100B (x¹⁶ + x¹² + x³ + x + 1)

use crate::error::{RsError, RsResult};
use std::fmt;

/// GF(2^4) generator: x⁴ + x + 1
pub const GF16_GENERATOR: u32 = 0x13;

/// GF(2^8) generator: x⁸ + x⁴ + x³ + x² + 1
pub const GF256_GENERATOR: u32 = 0x11D;

/// GF(2^16) generator: x¹⁶ + x¹² + x³ + x + 1
pub const GF65536_GENERATOR: u32 = 0x1100B;

const MIN_SIZE: usize = 4;
const MAX_SIZE: usize = 1 << 16;

/// Built-in generator polynomial for a field order, if there is one
pub fn default_generator(size: usize) -> Option<u32> {
    match size {
        16 => Some(GF16_GENERATOR),
        256 => Some(GF256_GENERATOR),
        65536 => Some(GF65536_GENERATOR),
        _ => None,
    }
}

/// Finite field GF(size) with precomputed log/antilog tables
#[derive(Clone)]
pub struct GaloisField {
    bits: u32,
    size: usize,
    generator: u32,
    log_table: Vec<u16>,
    exp_table: Vec<u16>, // 2x (size - 1) to avoid modulo in table_mul
}

impl GaloisField {
    /// Build GF(size) from its generator polynomial
    pub fn new(size: usize, generator: u32) -> RsResult<Self> {
        if !size.is_power_of_two() || !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(RsError::InvalidFieldSize { size });
        }

        let bits = size.trailing_zeros();
        if generator >> bits != 1 {
            return Err(RsError::InvalidGenerator { generator, size });
        }

        let mut gf = GaloisField {
            bits,
            size,
            generator,
            log_table: vec![0; size],
            exp_table: vec![0; 2 * (size - 1)],
        };
        gf.build_tables()?;
        Ok(gf)
    }

    /// Walk the powers of x, failing if they cycle early
    fn build_tables(&mut self) -> RsResult<()> {
        let limit = self.size - 1;
        let mut value = 1u32;

        for l in 0..limit {
            if l > 0 && (value <= 1 || self.log_table[value as usize] != 0) {
                return Err(self.not_primitive(l));
            }
            self.exp_table[l] = value as u16;
            self.log_table[value as usize] = l as u16;

            value <<= 1;
            if value & self.size as u32 != 0 {
                value ^= self.generator;
            }
        }

        if value != 1 {
            return Err(self.not_primitive(limit));
        }

        self.exp_table.copy_within(0..limit, limit);
        Ok(())
    }

    fn not_primitive(&self, period: usize) -> RsError {
        RsError::NotPrimitive {
            generator: self.generator,
            size: self.size,
            period,
        }
    }

    /// Field order
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Symbol width m of GF(2^m)
    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    #[inline]
    pub fn generator(&self) -> u32 {
        self.generator
    }

    /// Whether `value` is a canonical element of this field
    #[inline]
    pub fn contains(&self, value: u16) -> bool {
        (value as usize) < self.size
    }

    /// Add two elements - this is just XOR
    #[inline]
    pub fn add(&self, a: u16, b: u16) -> u16 {
        a ^ b
    }

    /// Subtract two elements - same as addition
    #[inline]
    pub fn sub(&self, a: u16, b: u16) -> u16 {
        a ^ b
    }

    /// Multiply two elements by shift-and-add with reduction, no tables
    pub fn mul(&self, a: u16, b: u16) -> u16 {
        debug_assert!(self.contains(a) && self.contains(b));

        let overflow = self.size as u32;
        let mut a = a as u32;
        let mut b = b as u32;
        let mut product = 0u32;

        while b != 0 {
            if b & 1 != 0 {
                product ^= a;
            }
            b >>= 1;
            a <<= 1;
            if a & overflow != 0 {
                a ^= self.generator;
            }
        }

        product as u16
    }

    /// Multiply two elements using the log/antilog tables
    #[inline]
    pub fn table_mul(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }

        let log_a = self.log_table[a as usize] as usize;
        let log_b = self.log_table[b as usize] as usize;
        self.exp_table[log_a + log_b]
    }

    /// Divide `a` by `b`
    #[inline]
    pub fn div(&self, a: u16, b: u16) -> RsResult<u16> {
        if b == 0 {
            return Err(RsError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }

        let log_a = self.log_table[a as usize] as usize;
        let log_b = self.log_table[b as usize] as usize;
        Ok(self.exp_table[log_a + (self.size - 1) - log_b])
    }

    /// Multiplicative inverse
    #[inline]
    pub fn inverse(&self, a: u16) -> RsResult<u16> {
        self.div(1, a)
    }

    /// Raise an element to a power
    pub fn pow(&self, base: u16, exponent: u32) -> u16 {
        if exponent == 0 {
            return 1;
        }
        if base == 0 {
            return 0;
        }

        let log_base = self.log_table[base as usize] as u64;
        let log_result = (log_base * exponent as u64) % (self.size as u64 - 1);
        self.exp_table[log_result as usize]
    }

    /// Discrete logarithm to base x; `None` for zero
    #[inline]
    pub fn log(&self, a: u16) -> Option<u16> {
        (a != 0).then(|| self.log_table[a as usize])
    }

    /// x raised to `exponent`, reduced modulo the multiplicative order
    #[inline]
    pub fn alpha_pow(&self, exponent: usize) -> u16 {
        self.exp_table[exponent % (self.size - 1)]
    }

    /// Nonzero elements in power order: `elements()[i]` is x^i
    #[inline]
    pub fn elements(&self) -> &[u16] {
        &self.exp_table[..self.size - 1]
    }
}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("size", &self.size)
            .field("generator", &format_args!("{:#x}", self.generator))
            .finish()
    }
}
