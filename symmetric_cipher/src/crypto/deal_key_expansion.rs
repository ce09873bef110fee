use crate::crypto::datatypes::{Key, RoundKey};
use crate::crypto::des::DES;
use crate::crypto::error::{CipherError, CipherResult};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::xor_in_place;

/// Fixed DES key used to derive DEAL round keys.
pub const DEAL_SCHEDULE_KEY: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

/// Round count for a DEAL key of `key_len` bytes.
pub fn deal_rounds(key_len: usize) -> CipherResult<usize> {
    match key_len {
        16 | 24 => Ok(6),
        32 => Ok(8),
        actual => Err(CipherError::InvalidKeySize {
            expected: "16, 24 or 32",
            actual,
        }),
    }
}

/// DEAL key schedule.
///
/// The key is cut into `s` 64-bit words `K_0..K_s`. Round key `i` is
/// `DES_{K*}(K_{i mod s} ^ RK_{i-1} ^ c_i)` with `RK_{-1} = 0`, `c_i = 0`
/// for the first `s` rounds and `2^(i-s)` afterwards.
pub struct DealKeyExpansion;

impl KeyExpansion for DealKeyExpansion {
    fn generate_round_keys(&self, key: &Key) -> CipherResult<Vec<RoundKey>> {
        let rounds = deal_rounds(key.len())?;
        let words: Vec<&[u8]> = key.as_bytes().chunks(8).collect();
        let s = words.len();
        let schedule_des = DES::with_key(&Key::from(DEAL_SCHEDULE_KEY))?;

        let mut previous = [0u8; 8];
        let mut round_keys = Vec::with_capacity(rounds);
        for i in 0..rounds {
            let mut input = previous;
            xor_in_place(&mut input, words[i % s]);
            if i >= s {
                let constant = 1u64 << (i - s);
                xor_in_place(&mut input, &constant.to_be_bytes());
            }
            let round_key = schedule_des.encrypt(&input)?;
            previous.copy_from_slice(&round_key);
            round_keys.push(RoundKey::from(round_key));
        }

        log::debug!("derived {rounds} DEAL round keys from a {}-byte key", key.len());
        Ok(round_keys)
    }
}
