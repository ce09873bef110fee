use crate::crypto::pht::pht;
use crate::crypto::sboxes::h;
use symmetric_cipher::crypto::encryption_transformation::CipherTransformation;
use symmetric_cipher::{CipherError, CipherResult, RoundKey};

fn word(bytes: &[u8], index: usize) -> u32 {
    let at = 4 * index;
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Twofish `F`: maps `(R0, R1)` and the round subkeys to `(F0, F1)`.
///
/// Owns the key-dependent S-box words, so each keyed cipher carries its own.
pub struct TwofishRoundFunction {
    sbox_keys: Vec<u32>,
}

impl TwofishRoundFunction {
    pub fn new(sbox_keys: Vec<u32>) -> Self {
        Self { sbox_keys }
    }

    pub fn g(&self, x: u32) -> u32 {
        h(x, &self.sbox_keys)
    }
}

impl CipherTransformation for TwofishRoundFunction {
    fn transform(&self, half_block: &[u8], round_key: &RoundKey) -> CipherResult<Vec<u8>> {
        if half_block.len() != 8 {
            return Err(CipherError::InvalidBlockSize {
                expected: 8,
                actual: half_block.len(),
            });
        }
        let key = round_key.as_bytes();
        if key.len() != 8 {
            return Err(CipherError::InvalidKeySize {
                expected: "8",
                actual: key.len(),
            });
        }

        let t0 = self.g(word(half_block, 0));
        let t1 = self.g(word(half_block, 1).rotate_left(8));
        let (f0, f1) = pht(t0, t1);
        let f0 = f0.wrapping_add(word(key, 0));
        let f1 = f1.wrapping_add(word(key, 1));

        let mut out = Vec::with_capacity(8);
        out.extend_from_slice(&f0.to_le_bytes());
        out.extend_from_slice(&f1.to_le_bytes());
        Ok(out)
    }
}
