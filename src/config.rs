//! Configuration for decoder construction

use crate::error::{RsError, RsResult};
use crate::galois::{default_generator, GF16_GENERATOR};

/// Code parameters fixed for the lifetime of a decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Field order, a power of two
    pub size: usize,
    /// Payload symbols per codeword
    pub data_symbols: usize,
    /// Field generator polynomial
    pub generator: u32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            size: 16,
            data_symbols: 11, // RS(15, 11), four check symbols
            generator: GF16_GENERATOR,
        }
    }
}

impl DecoderConfig {
    pub fn new(size: usize, data_symbols: usize, generator: u32) -> Self {
        Self {
            size,
            data_symbols,
            generator,
        }
    }

    /// Config using the built-in generator for `size`
    pub fn with_default_generator(size: usize, data_symbols: usize) -> RsResult<Self> {
        let generator = default_generator(size).ok_or(RsError::NoDefaultGenerator { size })?;
        Ok(Self::new(size, data_symbols, generator))
    }

    /// Check symbols per codeword (saturating; validated by the decoder)
    pub fn check_symbols(&self) -> usize {
        self.size
            .saturating_sub(1)
            .saturating_sub(self.data_symbols)
    }

    pub fn from_args(matches: &clap::ArgMatches) -> RsResult<Self> {
        let defaults = Self::default();

        let size = matches
            .get_one::<usize>("size")
            .copied()
            .unwrap_or(defaults.size);
        let data_symbols = matches
            .get_one::<usize>("data-symbols")
            .copied()
            .unwrap_or(defaults.data_symbols);

        match matches.get_one::<u32>("generator") {
            Some(&generator) => Ok(Self::new(size, data_symbols, generator)),
            None => Self::with_default_generator(size, data_symbols),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DecoderConfig::default();
        assert_eq!(config.check_symbols(), 4);
        assert_eq!(config.generator, 0x13);
    }

    #[test]
    fn test_default_generator_lookup() {
        let config = DecoderConfig::with_default_generator(256, 239).unwrap();
        assert_eq!(config.generator, 0x11D);
        assert_eq!(config.check_symbols(), 16);

        assert_eq!(
            DecoderConfig::with_default_generator(32, 20).unwrap_err(),
            RsError::NoDefaultGenerator { size: 32 }
        );
    }

    #[test]
    fn test_check_symbols_saturates() {
        assert_eq!(DecoderConfig::new(16, 20, 0x13).check_symbols(), 0);
    }
}
