use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::cipher_types::Operation;
use crate::crypto::datatypes::{Block, Key};
use crate::crypto::deal_key_expansion::{deal_rounds, DealKeyExpansion};
use crate::crypto::des_adapter::DesRoundFunction;
use crate::crypto::error::{CipherError, CipherResult};
use crate::crypto::feistel_network::FeistelNetwork;
use std::sync::Arc;

pub const DEAL_BLOCK_SIZE: usize = 16;

/// DEAL: a 128-bit Feistel cipher with DES as its round function.
///
/// The round count depends on the key length, so the network is rebuilt
/// whenever a key is set.
pub struct DEAL {
    feistel_network: Option<FeistelNetwork>,
}

impl DEAL {
    pub fn new() -> Self {
        Self {
            feistel_network: None,
        }
    }

    fn process(&self, block: &[u8], operation: Operation) -> CipherResult<Vec<u8>> {
        let network = self
            .feistel_network
            .as_ref()
            .ok_or(CipherError::State("DEAL key was never set"))?;
        if block.len() != DEAL_BLOCK_SIZE {
            return Err(CipherError::block_size(DEAL_BLOCK_SIZE, block.len()));
        }
        network.perform_rounds(block, operation)
    }

    pub fn rounds(&self) -> Option<usize> {
        self.feistel_network.as_ref().map(FeistelNetwork::rounds)
    }
}

impl Default for DEAL {
    fn default() -> Self {
        Self::new()
    }
}

impl SymmetricCipher for DEAL {
    fn set_round_keys(&mut self, key: &Key) -> CipherResult<()> {
        let mut network = FeistelNetwork::new(
            deal_rounds(key.len())?,
            Arc::new(DealKeyExpansion),
            Arc::new(DesRoundFunction),
        );
        network.set_round_keys(key)?;
        self.feistel_network = Some(network);
        Ok(())
    }

    fn encrypt_block(&self, block: &Block) -> CipherResult<Block> {
        self.process(block.as_bytes(), Operation::Encryption)
            .map(Block::from)
    }

    fn decrypt_block(&self, block: &Block) -> CipherResult<Block> {
        self.process(block.as_bytes(), Operation::Decryption)
            .map(Block::from)
    }

    fn block_size(&self) -> usize {
        DEAL_BLOCK_SIZE
    }
}
