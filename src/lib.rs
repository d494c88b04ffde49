//! Reed-Solomon decoding core: syndromes and the Berlekamp-Massey
//! error-locator polynomial over GF(2^m).

pub mod args;
pub mod berlekamp;
pub mod config;
pub mod decoder;
pub mod error;
pub mod galois;
pub mod poly;
pub mod syndrome;
pub mod types;

pub use args::parse_args;
pub use berlekamp::{error_locator, BerlekampMassey};
pub use config::DecoderConfig;
pub use decoder::Decoder;
pub use error::{RsError, RsResult};
pub use galois::GaloisField;
pub use poly::Polynomial;
pub use syndrome::{calc_syndrome, Syndromes};
pub use types::{DecodeOutput, ErrorLocator};
