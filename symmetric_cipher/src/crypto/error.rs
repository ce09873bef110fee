use crate::crypto::cipher_types::CipherMode;
use thiserror::Error;

pub type CipherResult<T> = Result<T, CipherError>;

#[derive(Debug, Error)]
pub enum CipherError {
    /// Missing or inconsistent constructor argument (IV, nominal block size, ...).
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid block size: expected {expected} bytes, got {actual}")]
    InvalidBlockSize { expected: usize, actual: usize },

    /// A Feistel block must split into two equal halves.
    #[error("block of {actual} bytes cannot be split into equal halves")]
    UnevenBlock { actual: usize },

    #[error("invalid key size: expected {expected} bytes, got {actual}")]
    InvalidKeySize { expected: &'static str, actual: usize },

    /// Operation attempted before the cipher was keyed.
    #[error("invalid state: {0}")]
    State(&'static str),

    #[error("encryption mode {0} is not supported")]
    UnsupportedMode(CipherMode),

    #[error("bit index {index} is out of range for a {total_bits}-bit input")]
    IndexOutOfRange { index: i64, total_bits: usize },

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl CipherError {
    pub(crate) fn block_size(expected: usize, actual: usize) -> Self {
        CipherError::InvalidBlockSize { expected, actual }
    }
}
