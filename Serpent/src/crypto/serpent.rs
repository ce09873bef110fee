use crate::crypto::key_schedule::SerpentKeyExpansion;
use crate::crypto::linear_transform::{inverse_linear_transform, linear_transform};
use crate::crypto::sboxes::{apply_inverse_sbox, apply_sbox};
use crate::crypto::words::{bytes_to_words, words_to_bytes};
use std::sync::Arc;
use symmetric_cipher::crypto::substitution_permutation_network::{
    SubstitutionPermutation, SubstitutionPermutationNetwork,
};
use symmetric_cipher::{Block, CipherError, CipherResult, Key, Operation, SymmetricCipher};

pub const SERPENT_BLOCK_SIZE: usize = 16;
/// Rounds driven by the network; the 32nd round is the final whitening step.
const NETWORK_ROUNDS: usize = 31;

/// Serpent S-box and linear transform layers.
pub struct SerpentLayers;

impl SubstitutionPermutation for SerpentLayers {
    fn substitute(&self, data: &[u8], round: usize, operation: Operation) -> CipherResult<Vec<u8>> {
        let words = bytes_to_words(data)?;
        let out = match operation {
            Operation::Encryption => apply_sbox(round, &words),
            Operation::Decryption => apply_inverse_sbox(round, &words),
        };
        Ok(words_to_bytes(&out))
    }

    fn permute(&self, data: &[u8], operation: Operation) -> CipherResult<Vec<u8>> {
        let words = bytes_to_words(data)?;
        let out = match operation {
            Operation::Encryption => linear_transform(&words),
            Operation::Decryption => inverse_linear_transform(&words),
        };
        Ok(words_to_bytes(&out))
    }
}

/// Serpent block cipher: 128-bit blocks, keys up to 256 bits.
///
/// Rounds 0..31 run on the generic network. The last round replaces the
/// linear transform with a second key addition and is applied here.
pub struct Serpent {
    network: SubstitutionPermutationNetwork,
}

impl Serpent {
    pub fn new() -> Self {
        Self {
            network: SubstitutionPermutationNetwork::new(
                NETWORK_ROUNDS,
                SERPENT_BLOCK_SIZE,
                Arc::new(SerpentKeyExpansion),
                Arc::new(SerpentLayers),
            ),
        }
    }

    pub fn with_key(key: &Key) -> CipherResult<Self> {
        let mut serpent = Self::new();
        serpent.set_round_keys(key)?;
        Ok(serpent)
    }

    fn check_block(block: &[u8]) -> CipherResult<()> {
        if block.len() != SERPENT_BLOCK_SIZE {
            return Err(CipherError::InvalidBlockSize {
                expected: SERPENT_BLOCK_SIZE,
                actual: block.len(),
            });
        }
        Ok(())
    }

    pub fn encrypt(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        Self::check_block(block)?;
        let round_keys = self.network.round_keys()?;
        let layers = self.network.layers();

        let state = self.network.perform_rounds(block, Operation::Encryption)?;
        let state = layers.apply_key(&state, &round_keys[NETWORK_ROUNDS])?;
        let state = layers.substitute(&state, NETWORK_ROUNDS, Operation::Encryption)?;
        layers.apply_key(&state, &round_keys[NETWORK_ROUNDS + 1])
    }

    pub fn decrypt(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        Self::check_block(block)?;
        let round_keys = self.network.round_keys()?;
        let layers = self.network.layers();

        let state = layers.apply_key(block, &round_keys[NETWORK_ROUNDS + 1])?;
        let state = layers.substitute(&state, NETWORK_ROUNDS, Operation::Decryption)?;
        let state = layers.apply_key(&state, &round_keys[NETWORK_ROUNDS])?;
        self.network.perform_rounds(&state, Operation::Decryption)
    }
}

impl Default for Serpent {
    fn default() -> Self {
        Self::new()
    }
}

impl SymmetricCipher for Serpent {
    fn set_round_keys(&mut self, key: &Key) -> CipherResult<()> {
        self.network.set_round_keys(key)
    }

    fn encrypt_block(&self, block: &Block) -> CipherResult<Block> {
        self.encrypt(block.as_bytes()).map(Block::from)
    }

    fn decrypt_block(&self, block: &Block) -> CipherResult<Block> {
        self.decrypt(block.as_bytes()).map(Block::from)
    }

    fn block_size(&self) -> usize {
        SERPENT_BLOCK_SIZE
    }
}
