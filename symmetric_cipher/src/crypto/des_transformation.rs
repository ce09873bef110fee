use crate::crypto::datatypes::RoundKey;
use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::CipherTransformation;
use crate::crypto::error::{CipherError, CipherResult};
use crate::crypto::utils::{permute, xor, BitOrder, StartingBitIndex};
use bitvec::prelude::*;

/// The DES round function `f(R, K)`.
pub struct DesTransformation;

impl CipherTransformation for DesTransformation {
    fn transform(&self, r_block: &[u8], round_key: &RoundKey) -> CipherResult<Vec<u8>> {
        if r_block.len() != 4 {
            return Err(CipherError::block_size(4, r_block.len()));
        }

        // 1. Expansion
        let expanded = permute(r_block, &E, BitOrder::MostSignificantFirst, StartingBitIndex::One)?;

        // 2. XOR
        let mixed = xor(&expanded, round_key.as_bytes())?;

        // 3. S-boxes: six bits in, four bits out
        let mut s_result = [0u8; 4];
        let input = mixed.view_bits::<Msb0>();
        let output = s_result.view_bits_mut::<Msb0>();
        for (box_i, group) in input.chunks_exact(6).enumerate() {
            let row = ((group[0] as usize) << 1) | group[5] as usize;
            let col = group[1..5]
                .iter()
                .by_vals()
                .fold(0usize, |acc, bit| (acc << 1) | bit as usize);
            let s_val = S_BOXES[box_i][row * 16 + col];
            for j in 0..4 {
                output.set(box_i * 4 + j, (s_val >> (3 - j)) & 1 == 1);
            }
        }

        // 4. P-permutation
        permute(&s_result, &P, BitOrder::MostSignificantFirst, StartingBitIndex::One)
    }
}
