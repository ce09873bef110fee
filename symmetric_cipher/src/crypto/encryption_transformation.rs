use crate::crypto::datatypes::RoundKey;
use crate::crypto::error::CipherResult;

/// Feistel round function: maps a half block and a round key to a half block.
pub trait CipherTransformation {
    fn transform(&self, half_block: &[u8], round_key: &RoundKey) -> CipherResult<Vec<u8>>;
}
