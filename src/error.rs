//! Error types for field construction and decoding

use thiserror::Error;

/// Errors that can occur while building a field or decoding a received word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Field order is not a supported power of two
    #[error("Field size {size} is not a power of two between 4 and 65536")]
    InvalidFieldSize { size: usize },

    /// Generator polynomial degree does not match the field order
    #[error("Generator polynomial {generator:#x} does not have degree log2({size})")]
    InvalidGenerator { generator: u32, size: usize },

    /// Generator polynomial does not make x a primitive element
    ///
    /// Covers reducible polynomials and irreducible ones where x has an order
    /// below `size - 1`; field elements are enumerated as powers of x.
    #[error(
        "Generator polynomial {generator:#x} is reducible or not primitive for GF({size}): \
         x has order {period}, need {}",
        .size - 1
    )]
    NotPrimitive {
        generator: u32,
        size: usize,
        period: usize,
    },

    /// No generator given and none built in for this field order
    #[error("No built-in generator polynomial for GF({size}), pass one explicitly")]
    NoDefaultGenerator { size: usize },

    /// Fewer than two check symbols leaves nothing to locate
    #[error("At least 2 check symbols are required, got {check_symbols}")]
    TooFewCheckSymbols { check_symbols: usize },

    /// More data symbols than a codeword can hold
    #[error("{data_symbols} data symbols do not fit in a GF({size}) codeword")]
    TooManyDataSymbols { data_symbols: usize, size: usize },

    /// Division by (or inversion of) the zero element
    #[error("Division by zero in Galois field")]
    DivisionByZero,

    /// Berlekamp-Massey iteration outside the syndrome sequence
    #[error("Iteration {k} is outside 1..={syndromes} for {syndromes} syndromes")]
    IterationOutOfRange { k: usize, syndromes: usize },

    /// Input buffer of the wrong shape
    #[error("{what} has length {actual}, expected {expected}")]
    WrongLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Received symbol is not an element of the field
    #[error("Symbol {value} at index {index} is outside GF({size})")]
    SymbolOutOfRange {
        index: usize,
        value: u16,
        size: usize,
    },
}

/// Type alias for field and decoder results
pub type RsResult<T> = Result<T, RsError>;
