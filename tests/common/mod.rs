//! Shared helpers for building codewords and expected locators in tests

#![allow(dead_code)]

use rsdecode::GaloisField;

/// Product of two polynomials, low degree first
pub fn poly_mul(field: &GaloisField, a: &[u16], b: &[u16]) -> Vec<u16> {
    let mut product = vec![0u16; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            product[i + j] ^= field.mul(x, y);
        }
    }
    product
}

/// g(x) = (x + a^1)(x + a^2)...(x + a^check_symbols)
pub fn generator_poly(field: &GaloisField, check_symbols: usize) -> Vec<u16> {
    (1..=check_symbols).fold(vec![1u16], |g, power| {
        poly_mul(field, &g, &[field.alpha_pow(power), 1])
    })
}

/// Non-systematic codeword message(x) * g(x)
pub fn encode(field: &GaloisField, message: &[u16], check_symbols: usize) -> Vec<u16> {
    poly_mul(field, message, &generator_poly(field, check_symbols))
}

/// Product of (1 + a^j x) over the error positions, padded to `len`
pub fn expected_locator(field: &GaloisField, positions: &[usize], len: usize) -> Vec<u16> {
    let mut locator = positions.iter().fold(vec![1u16], |acc, &j| {
        poly_mul(field, &acc, &[1, field.alpha_pow(j)])
    });
    locator.resize(len, 0);
    locator
}
