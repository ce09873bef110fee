use crate::crypto::datatypes::{Key, RoundKey};
use crate::crypto::error::CipherResult;

/// Derives the ordered round keys of a cipher from its main key.
pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &Key) -> CipherResult<Vec<RoundKey>>;
}
