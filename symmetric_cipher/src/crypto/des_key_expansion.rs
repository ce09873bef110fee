use crate::crypto::datatypes::{Key, RoundKey};
use crate::crypto::des_tables::{PC1, PC2, SHIFT_BITS};
use crate::crypto::error::{CipherError, CipherResult};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{concatenate, permute, rotate, BitOrder, StartingBitIndex};

pub const DES_KEY_SIZE: usize = 8;

/// DES key schedule: sixteen 48-bit round keys.
pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &Key) -> CipherResult<Vec<RoundKey>> {
        if key.len() != DES_KEY_SIZE {
            return Err(CipherError::InvalidKeySize {
                expected: "8",
                actual: key.len(),
            });
        }

        // 56 bits after PC-1. C is bits 0..28 of bytes 0..4, D is bits 4..32 of bytes 3..7.
        let permuted = permute(
            key.as_bytes(),
            &PC1,
            BitOrder::MostSignificantFirst,
            StartingBitIndex::One,
        )?;
        let mut c = permuted[0..4].to_vec();
        let mut d = permuted[3..7].to_vec();

        let mut round_keys = Vec::with_capacity(SHIFT_BITS.len());
        for &shift in &SHIFT_BITS {
            c = rotate(&c, shift as isize, 0, 28)?;
            d = rotate(&d, shift as isize, 4, 28)?;

            let cd = concatenate(&c, 0, 28, &d, 4, 28)?;
            let subkey = permute(
                &cd,
                &PC2,
                BitOrder::MostSignificantFirst,
                StartingBitIndex::One,
            )?;
            round_keys.push(RoundKey::from(subkey));
        }

        Ok(round_keys)
    }
}
