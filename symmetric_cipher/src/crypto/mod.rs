pub mod cipher_context;
mod cipher_io;
pub mod cipher_traits;
pub mod cipher_types;
pub mod datatypes;
pub mod deal;
pub mod deal_key_expansion;
pub mod des;
mod des_adapter;
pub mod des_key_expansion;
pub mod des_tables;
pub mod des_transformation;
pub mod encryption_transformation;
pub mod error;
pub mod feistel_network;
pub mod key_expansion;
pub mod padding;
pub mod substitution_permutation_network;
pub mod utils;

use crate::crypto::datatypes::{Key, RoundKey};
use crate::crypto::encryption_transformation::CipherTransformation;
use crate::crypto::error::CipherResult;
use crate::crypto::key_expansion::KeyExpansion;
use std::sync::Arc;

impl<T: KeyExpansion + ?Sized> KeyExpansion for Arc<T> {
    fn generate_round_keys(&self, key: &Key) -> CipherResult<Vec<RoundKey>> {
        (**self).generate_round_keys(key)
    }
}

impl<T: CipherTransformation + ?Sized> CipherTransformation for Arc<T> {
    fn transform(&self, half_block: &[u8], round_key: &RoundKey) -> CipherResult<Vec<u8>> {
        (**self).transform(half_block, round_key)
    }
}
