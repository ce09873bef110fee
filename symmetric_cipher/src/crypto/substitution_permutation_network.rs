use crate::crypto::cipher_types::Operation;
use crate::crypto::datatypes::{Key, RoundKey};
use crate::crypto::error::{CipherError, CipherResult};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::xor;
use std::sync::Arc;

/// Cipher specific layers of a substitution-permutation network.
///
/// `Operation::Decryption` asks for the inverse of the layer.
pub trait SubstitutionPermutation {
    fn substitute(&self, data: &[u8], round: usize, operation: Operation) -> CipherResult<Vec<u8>>;

    fn permute(&self, data: &[u8], operation: Operation) -> CipherResult<Vec<u8>>;

    /// Key mixing. XOR by default, which is its own inverse.
    fn apply_key(&self, data: &[u8], round_key: &RoundKey) -> CipherResult<Vec<u8>> {
        xor(data, round_key.as_bytes())
    }
}

impl<T: SubstitutionPermutation + ?Sized> SubstitutionPermutation for Arc<T> {
    fn substitute(&self, data: &[u8], round: usize, operation: Operation) -> CipherResult<Vec<u8>> {
        (**self).substitute(data, round, operation)
    }

    fn permute(&self, data: &[u8], operation: Operation) -> CipherResult<Vec<u8>> {
        (**self).permute(data, operation)
    }

    fn apply_key(&self, data: &[u8], round_key: &RoundKey) -> CipherResult<Vec<u8>> {
        (**self).apply_key(data, round_key)
    }
}

/// Drives `rounds` rounds of key mixing, substitution and permutation.
///
/// The key expansion may return more keys than rounds; the surplus is left
/// for whitening steps a concrete cipher adds around the engine.
pub struct SubstitutionPermutationNetwork {
    rounds: usize,
    block_size: usize,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    layers: Arc<dyn SubstitutionPermutation + Send + Sync>,
    round_keys: Option<Vec<RoundKey>>,
}

impl SubstitutionPermutationNetwork {
    pub fn new(
        rounds: usize,
        block_size: usize,
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        layers: Arc<dyn SubstitutionPermutation + Send + Sync>,
    ) -> Self {
        Self {
            rounds,
            block_size,
            key_expansion,
            layers,
            round_keys: None,
        }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn layers(&self) -> &(dyn SubstitutionPermutation + Send + Sync) {
        self.layers.as_ref()
    }

    pub fn set_round_keys(&mut self, key: &Key) -> CipherResult<()> {
        let round_keys = self.key_expansion.generate_round_keys(key)?;
        if round_keys.len() < self.rounds {
            return Err(CipherError::Configuration(format!(
                "key expansion produced {} round keys for a {}-round network",
                round_keys.len(),
                self.rounds
            )));
        }
        log::debug!(
            "spn keyed with {} round keys for {} rounds",
            round_keys.len(),
            self.rounds
        );
        self.round_keys = Some(round_keys);
        Ok(())
    }

    pub fn round_keys(&self) -> CipherResult<&[RoundKey]> {
        self.round_keys
            .as_deref()
            .ok_or(CipherError::State("spn round keys were never set"))
    }

    pub fn perform_rounds(&self, block: &[u8], operation: Operation) -> CipherResult<Vec<u8>> {
        let round_keys = self.round_keys()?;
        if block.len() != self.block_size {
            return Err(CipherError::block_size(self.block_size, block.len()));
        }

        let layers = self.layers.as_ref();
        let mut state = block.to_vec();
        match operation {
            Operation::Encryption => {
                for round in 0..self.rounds {
                    state = layers.apply_key(&state, &round_keys[round])?;
                    state = layers.substitute(&state, round, Operation::Encryption)?;
                    state = layers.permute(&state, Operation::Encryption)?;
                }
            }
            Operation::Decryption => {
                for round in (0..self.rounds).rev() {
                    state = layers.permute(&state, Operation::Decryption)?;
                    state = layers.substitute(&state, round, Operation::Decryption)?;
                    state = layers.apply_key(&state, &round_keys[round])?;
                }
            }
        }
        Ok(state)
    }
}
