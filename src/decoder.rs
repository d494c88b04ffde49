//! Syndrome and error-locator decoder
//!
//! A [`Decoder`] owns one immutable [`GaloisField`] built at construction.
//! Every decode call allocates its own syndrome and polynomial buffers, so
//! one decoder can be shared across threads; [`Decoder::decode_batch`] does
//! exactly that with rayon.
//!
//! Decoding stops at the error-locator polynomial. Finding its roots and the
//! error magnitudes is left to the caller.

use crate::berlekamp::{self, error_locator};
use crate::config::DecoderConfig;
use crate::error::{RsError, RsResult};
use crate::galois::GaloisField;
use crate::syndrome::Syndromes;
use crate::types::DecodeOutput;
use log::debug;
use rayon::prelude::*;

/// Reed-Solomon decoder for codewords of length `size - 1`
#[derive(Debug, Clone)]
pub struct Decoder {
    field: GaloisField,
    data_symbols: usize,
    check_symbols: usize,
}

impl Decoder {
    /// Build the field and validate the code parameters
    pub fn new(size: usize, data_symbols: usize, generator: u32) -> RsResult<Self> {
        let field = GaloisField::new(size, generator)?;

        let codeword_len = size - 1;
        if data_symbols > codeword_len {
            return Err(RsError::TooManyDataSymbols { data_symbols, size });
        }

        let check_symbols = codeword_len - data_symbols;
        if check_symbols < 2 {
            return Err(RsError::TooFewCheckSymbols { check_symbols });
        }

        debug!(
            "Decoder for GF({}) generator {:#x}: {} data + {} check symbols",
            size, generator, data_symbols, check_symbols
        );

        Ok(Self {
            field,
            data_symbols,
            check_symbols,
        })
    }

    pub fn from_config(config: &DecoderConfig) -> RsResult<Self> {
        Self::new(config.size, config.data_symbols, config.generator)
    }

    #[inline]
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.field.size()
    }

    #[inline]
    pub fn data_symbols(&self) -> usize {
        self.data_symbols
    }

    #[inline]
    pub fn check_symbols(&self) -> usize {
        self.check_symbols
    }

    /// Symbols per received word
    #[inline]
    pub fn codeword_len(&self) -> usize {
        self.size() - 1
    }

    /// Coefficients in the returned error-locator polynomial
    #[inline]
    pub fn locator_len(&self) -> usize {
        berlekamp::locator_len(self.check_symbols)
    }

    /// Check length and symbol range of a received word
    pub fn validate(&self, received: &[u16]) -> RsResult<()> {
        if received.len() != self.codeword_len() {
            return Err(RsError::WrongLength {
                what: "Received word",
                expected: self.codeword_len(),
                actual: received.len(),
            });
        }

        match received
            .iter()
            .position(|&symbol| !self.field.contains(symbol))
        {
            Some(index) => Err(RsError::SymbolOutOfRange {
                index,
                value: received[index],
                size: self.size(),
            }),
            None => Ok(()),
        }
    }

    /// Syndromes of a received word, one per check symbol
    pub fn syndromes(&self, received: &[u16]) -> RsResult<Syndromes> {
        self.validate(received)?;
        Ok(Syndromes::compute(&self.field, received, self.check_symbols))
    }

    /// Compute syndromes and the error-locator polynomial
    pub fn decode(&self, received: &[u16]) -> RsResult<DecodeOutput> {
        let syndromes = self.syndromes(received)?;
        let locator = error_locator(&self.field, syndromes.as_slice(), self.locator_len())?;

        debug!(
            "Decoded word: syndromes {:?}, locator {:?} (L = {})",
            syndromes.as_slice(),
            locator.coefficients(),
            locator.register_length()
        );

        Ok(DecodeOutput { syndromes, locator })
    }

    /// Decode many words in parallel against the same field
    pub fn decode_batch<W>(&self, words: &[W]) -> Vec<RsResult<DecodeOutput>>
    where
        W: AsRef<[u16]> + Sync,
    {
        words
            .par_iter()
            .map(|word| self.decode(word.as_ref()))
            .collect()
    }
}
