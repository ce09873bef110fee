use crate::crypto::cipher_types::Operation;
use crate::crypto::datatypes::{Block, Key, RoundKey};
use crate::crypto::encryption_transformation::CipherTransformation;
use crate::crypto::error::{CipherError, CipherResult};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::xor;
use std::sync::Arc;

/// Generic balanced Feistel network.
///
/// Encryption and decryption share one butterfly loop; decryption only walks
/// the cached round keys in reverse. The halves are swapped back on output
/// (right then left) so that running the network again with reversed keys
/// undoes it.
pub struct FeistelNetwork {
    num_round: usize,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    transformation: Arc<dyn CipherTransformation + Send + Sync>,
    round_keys: Option<Vec<RoundKey>>,
}

impl FeistelNetwork {
    pub fn new(
        num_round: usize,
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn CipherTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_round,
            key_expansion,
            transformation,
            round_keys: None,
        }
    }

    pub fn rounds(&self) -> usize {
        self.num_round
    }

    pub fn set_round_keys(&mut self, key: &Key) -> CipherResult<()> {
        let round_keys = self.key_expansion.generate_round_keys(key)?;
        if round_keys.len() != self.num_round {
            return Err(CipherError::Configuration(format!(
                "key expansion produced {} round keys for a {}-round network",
                round_keys.len(),
                self.num_round
            )));
        }
        log::debug!("feistel network keyed with {} round keys", round_keys.len());
        self.round_keys = Some(round_keys);
        Ok(())
    }

    pub fn is_keyed(&self) -> bool {
        self.round_keys.is_some()
    }

    pub fn perform_rounds(&self, block: &[u8], operation: Operation) -> CipherResult<Vec<u8>> {
        let round_keys = self
            .round_keys
            .as_deref()
            .ok_or(CipherError::State("feistel round keys were never set"))?;

        if block.len() % 2 != 0 {
            return Err(CipherError::UnevenBlock {
                actual: block.len(),
            });
        }

        let (left, right) = block.split_at(block.len() / 2);
        let mut left = left.to_vec();
        let mut right = right.to_vec();

        for index in 0..self.num_round {
            let round_key = match operation {
                Operation::Encryption => &round_keys[index],
                Operation::Decryption => &round_keys[self.num_round - 1 - index],
            };
            let feistel_out = self.transformation.transform(&right, round_key)?;
            let new_right = xor(&left, &feistel_out)?;
            left = right;
            right = new_right;
        }

        Ok([right, left].concat())
    }

    pub fn encrypt(&self, block: &Block) -> CipherResult<Block> {
        self.perform_rounds(block.as_bytes(), Operation::Encryption)
            .map(Block::from)
    }

    pub fn decrypt(&self, block: &Block) -> CipherResult<Block> {
        self.perform_rounds(block.as_bytes(), Operation::Decryption)
            .map(Block::from)
    }
}
