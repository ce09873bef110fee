use crate::crypto::sboxes::apply_sbox;
use crate::crypto::words::words_to_bytes;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;
use symmetric_cipher::{CipherError, CipherResult, Key, RoundKey};

const PHI: u32 = 0x9e37_79b9;
pub const ROUND_KEY_COUNT: usize = 33;

/// Serpent key schedule: 33 128-bit round keys.
///
/// Keys shorter than 256 bits are extended with a single 1 bit followed by
/// zeros before the prekey recurrence runs.
pub struct SerpentKeyExpansion;

impl KeyExpansion for SerpentKeyExpansion {
    fn generate_round_keys(&self, key: &Key) -> CipherResult<Vec<RoundKey>> {
        let len = key.len();
        if len == 0 || len > 32 || len % 4 != 0 {
            return Err(CipherError::InvalidKeySize {
                expected: "4 to 32 in steps of 4",
                actual: len,
            });
        }

        let mut material = [0u8; 32];
        material[..len].copy_from_slice(key.as_bytes());
        if len < 32 {
            material[len] = 0x01;
        }

        let mut w = [0u32; 8 + 4 * ROUND_KEY_COUNT];
        for (word, chunk) in w.iter_mut().zip(material.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        for i in 8..w.len() {
            let index = (i - 8) as u32;
            w[i] = (w[i - 8] ^ w[i - 5] ^ w[i - 3] ^ w[i - 1] ^ PHI ^ index).rotate_left(11);
        }

        let prekeys = &w[8..];
        let round_keys = (0..ROUND_KEY_COUNT)
            .map(|i| {
                let words = [
                    prekeys[4 * i],
                    prekeys[4 * i + 1],
                    prekeys[4 * i + 2],
                    prekeys[4 * i + 3],
                ];
                // Round key i goes through S-box (3 - i) mod 8.
                let sbox = (3 + 8 * ROUND_KEY_COUNT - i) % 8;
                RoundKey::from(words_to_bytes(&apply_sbox(sbox, &words)))
            })
            .collect();

        log::debug!("derived {ROUND_KEY_COUNT} serpent round keys from a {len}-byte key");
        Ok(round_keys)
    }
}
