use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::cipher_types::Operation;
use crate::crypto::datatypes::{Block, Key};
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::error::{CipherError, CipherResult};
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::utils::{permute, BitOrder, StartingBitIndex};
use std::sync::Arc;

pub const DES_BLOCK_SIZE: usize = 8;
const DES_ROUNDS: usize = 16;

pub struct DES {
    feistel_network: FeistelNetwork,
}

impl DES {
    pub fn new() -> Self {
        Self {
            feistel_network: FeistelNetwork::new(
                DES_ROUNDS,
                Arc::new(DesKeyExpansion),
                Arc::new(DesTransformation),
            ),
        }
    }

    /// A DES instance already keyed with `key`.
    pub fn with_key(key: &Key) -> CipherResult<Self> {
        let mut des = Self::new();
        des.set_round_keys(key)?;
        Ok(des)
    }

    fn process(&self, block: &[u8], operation: Operation) -> CipherResult<Vec<u8>> {
        if block.len() != DES_BLOCK_SIZE {
            return Err(CipherError::block_size(DES_BLOCK_SIZE, block.len()));
        }
        let permuted = permute(block, &IP, BitOrder::MostSignificantFirst, StartingBitIndex::One)?;
        let result = self.feistel_network.perform_rounds(&permuted, operation)?;
        permute(&result, &FP, BitOrder::MostSignificantFirst, StartingBitIndex::One)
    }

    pub fn encrypt(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        self.process(block, Operation::Encryption)
    }

    pub fn decrypt(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        self.process(block, Operation::Decryption)
    }
}

impl Default for DES {
    fn default() -> Self {
        Self::new()
    }
}

impl SymmetricCipher for DES {
    fn set_round_keys(&mut self, key: &Key) -> CipherResult<()> {
        self.feistel_network.set_round_keys(key)
    }

    fn encrypt_block(&self, block: &Block) -> CipherResult<Block> {
        self.encrypt(block.as_bytes()).map(Block::from)
    }

    fn decrypt_block(&self, block: &Block) -> CipherResult<Block> {
        self.decrypt(block.as_bytes()).map(Block::from)
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }
}
