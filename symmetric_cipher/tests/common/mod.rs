#![allow(dead_code)]

use symmetric_cipher::{Block, CipherError, CipherResult, Key, SymmetricCipher};

/// Cheap keyed byte permutation used where DES would make a test slow.
pub struct XorCipher {
    key: Option<Vec<u8>>,
}

impl XorCipher {
    pub fn new() -> Self {
        Self { key: None }
    }

    fn key(&self) -> CipherResult<&[u8]> {
        self.key.as_deref().ok_or(CipherError::State("no key"))
    }
}

impl SymmetricCipher for XorCipher {
    fn set_round_keys(&mut self, key: &Key) -> CipherResult<()> {
        if key.len() != 8 {
            return Err(CipherError::InvalidKeySize { expected: "8", actual: key.len() });
        }
        self.key = Some(key.as_bytes().to_vec());
        Ok(())
    }

    fn encrypt_block(&self, block: &Block) -> CipherResult<Block> {
        let key = self.key()?;
        Ok(block
            .as_bytes()
            .iter()
            .zip(key)
            .map(|(b, k)| (b ^ k).rotate_left(3))
            .collect::<Vec<u8>>()
            .into())
    }

    fn decrypt_block(&self, block: &Block) -> CipherResult<Block> {
        let key = self.key()?;
        Ok(block
            .as_bytes()
            .iter()
            .zip(key)
            .map(|(b, k)| b.rotate_right(3) ^ k)
            .collect::<Vec<u8>>()
            .into())
    }

    fn block_size(&self) -> usize {
        8
    }
}

/// Deterministic test data that never ends in a zero byte.
pub fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 31 + 7) % 255) as u8 + 1).collect()
}

/// Declares an 8-byte block but hands back only half of it.
pub struct TruncatingCipher;

impl SymmetricCipher for TruncatingCipher {
    fn set_round_keys(&mut self, _key: &Key) -> CipherResult<()> {
        Ok(())
    }

    fn encrypt_block(&self, block: &Block) -> CipherResult<Block> {
        Ok(Block::from(&block.as_bytes()[..4]))
    }

    fn decrypt_block(&self, block: &Block) -> CipherResult<Block> {
        Ok(Block::from(&block.as_bytes()[..4]))
    }

    fn block_size(&self) -> usize {
        8
    }
}
