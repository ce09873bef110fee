use crate::crypto::key_schedule::{sbox_key_words, TwofishKeyExpansion, ROUNDS};
use crate::crypto::round_function::TwofishRoundFunction;
use symmetric_cipher::crypto::encryption_transformation::CipherTransformation;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;
use symmetric_cipher::{Block, CipherError, CipherResult, Key, RoundKey, SymmetricCipher};

pub const TWOFISH_BLOCK_SIZE: usize = 16;

type Words = [u32; 4];

fn to_words(bytes: &[u8]) -> Words {
    let mut words = [0u32; 4];
    for (w, c) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
    }
    words
}

fn to_bytes(words: &Words) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

fn whiten(words: &mut Words, key: &RoundKey) {
    for (w, k) in words.iter_mut().zip(to_words(key.as_bytes())) {
        *w ^= k;
    }
}

struct KeyedState {
    round_keys: Vec<RoundKey>,
    round_function: TwofishRoundFunction,
}

/// Twofish with 128, 192 or 256-bit keys.
///
/// All key-derived material lives on the instance, so differently keyed
/// instances can be used from several threads at once.
pub struct Twofish {
    keyed: Option<KeyedState>,
}

impl Twofish {
    pub fn new() -> Self {
        Self { keyed: None }
    }

    pub fn with_key(key: &Key) -> CipherResult<Self> {
        let mut twofish = Self::new();
        twofish.set_round_keys(key)?;
        Ok(twofish)
    }

    fn state(&self, block: &[u8]) -> CipherResult<&KeyedState> {
        let keyed = self
            .keyed
            .as_ref()
            .ok_or(CipherError::State("twofish key was never set"))?;
        if block.len() != TWOFISH_BLOCK_SIZE {
            return Err(CipherError::InvalidBlockSize {
                expected: TWOFISH_BLOCK_SIZE,
                actual: block.len(),
            });
        }
        Ok(keyed)
    }

    fn f(keyed: &KeyedState, r0: u32, r1: u32, round: usize) -> CipherResult<(u32, u32)> {
        let mut half = Vec::with_capacity(8);
        half.extend_from_slice(&r0.to_le_bytes());
        half.extend_from_slice(&r1.to_le_bytes());
        let out = keyed
            .round_function
            .transform(&half, &keyed.round_keys[2 + round])?;
        let words = to_words(&out);
        Ok((words[0], words[1]))
    }

    pub fn encrypt(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        let keyed = self.state(block)?;
        let mut r = to_words(block);
        whiten(&mut r, &keyed.round_keys[0]);

        for round in 0..ROUNDS {
            let (f0, f1) = Self::f(keyed, r[0], r[1], round)?;
            let r2 = (r[2] ^ f0).rotate_right(1);
            let r3 = r[3].rotate_left(1) ^ f1;
            r = [r2, r3, r[0], r[1]];
        }

        // undo the last swap
        let mut out = [r[2], r[3], r[0], r[1]];
        whiten(&mut out, &keyed.round_keys[1]);
        Ok(to_bytes(&out))
    }

    pub fn decrypt(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        let keyed = self.state(block)?;
        let mut c = to_words(block);
        whiten(&mut c, &keyed.round_keys[1]);
        let mut r = [c[2], c[3], c[0], c[1]];

        for round in (0..ROUNDS).rev() {
            let (f0, f1) = Self::f(keyed, r[2], r[3], round)?;
            let r2 = r[0].rotate_left(1) ^ f0;
            let r3 = (r[1] ^ f1).rotate_right(1);
            r = [r[2], r[3], r2, r3];
        }

        whiten(&mut r, &keyed.round_keys[0]);
        Ok(to_bytes(&r))
    }
}

impl Default for Twofish {
    fn default() -> Self {
        Self::new()
    }
}

impl SymmetricCipher for Twofish {
    fn set_round_keys(&mut self, key: &Key) -> CipherResult<()> {
        let round_keys = TwofishKeyExpansion.generate_round_keys(key)?;
        let round_function = TwofishRoundFunction::new(sbox_key_words(key.as_bytes())?);
        self.keyed = Some(KeyedState {
            round_keys,
            round_function,
        });
        Ok(())
    }

    fn encrypt_block(&self, block: &Block) -> CipherResult<Block> {
        self.encrypt(block.as_bytes()).map(Block::from)
    }

    fn decrypt_block(&self, block: &Block) -> CipherResult<Block> {
        self.decrypt(block.as_bytes()).map(Block::from)
    }

    fn block_size(&self) -> usize {
        TWOFISH_BLOCK_SIZE
    }
}
