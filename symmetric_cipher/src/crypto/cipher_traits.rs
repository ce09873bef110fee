use crate::crypto::datatypes::{Block, Key};
use crate::crypto::error::CipherResult;

/// A keyed single-block cipher.
///
/// `set_round_keys` derives and caches the round keys on the instance; the
/// block operations fail with [`CipherError::State`](crate::CipherError::State)
/// until it has succeeded once. The block operations only read instance
/// state, so one keyed instance may be shared across threads.
pub trait SymmetricCipher: Send + Sync {
    fn set_round_keys(&mut self, key: &Key) -> CipherResult<()>;
    fn encrypt_block(&self, block: &Block) -> CipherResult<Block>;
    fn decrypt_block(&self, block: &Block) -> CipherResult<Block>;
    fn block_size(&self) -> usize;
}

impl<T: SymmetricCipher + ?Sized> SymmetricCipher for Box<T> {
    fn set_round_keys(&mut self, key: &Key) -> CipherResult<()> {
        (**self).set_round_keys(key)
    }

    fn encrypt_block(&self, block: &Block) -> CipherResult<Block> {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &Block) -> CipherResult<Block> {
        (**self).decrypt_block(block)
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }
}
