use crate::crypto::error::{CipherError, CipherResult};
use bitvec::prelude::*;

/// How the entries of a permutation table count bit positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    /// Position 0 is the most significant bit of the first byte.
    MostSignificantFirst,
    /// Position 0 is the least significant bit of the last byte.
    LeastSignificantFirst,
}

/// Whether a permutation table is authored 0-based or 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartingBitIndex {
    Zero,
    One,
}

impl StartingBitIndex {
    fn offset(self) -> i64 {
        match self {
            StartingBitIndex::Zero => 0,
            StartingBitIndex::One => 1,
        }
    }
}

fn bits(data: &[u8]) -> &BitSlice<u8, Msb0> {
    data.view_bits::<Msb0>()
}

fn check_window(data: &[u8], start_bit: usize, bit_count: usize) -> CipherResult<()> {
    let total_bits = data.len() * 8;
    match start_bit.checked_add(bit_count) {
        Some(end) if end <= total_bits => Ok(()),
        end => Err(CipherError::IndexOutOfRange {
            index: end.map_or(i64::MAX, |end| i64::try_from(end - 1).unwrap_or(i64::MAX)),
            total_bits,
        }),
    }
}

/// Builds a new buffer whose bit `i` is the input bit selected by `table[i]`.
///
/// Indices are resolved against the big-endian numbering of `input`
/// (bit 0 is the MSB of byte 0). With [`BitOrder::LeastSignificantFirst`]
/// a table index counts from the other end of the input. The output holds
/// `ceil(table.len() / 8)` bytes; when the table length is not a multiple of
/// eight the spare bits sit at the front of the first byte and are zero.
pub fn permute(
    input: &[u8],
    table: &[usize],
    order: BitOrder,
    start: StartingBitIndex,
) -> CipherResult<Vec<u8>> {
    let source = bits(input);
    let total_bits = source.len();
    let mut output = vec![0u8; table.len().div_ceil(8)];
    let pad = output.len() * 8 - table.len();
    let target = output.view_bits_mut::<Msb0>();

    for (i, &entry) in table.iter().enumerate() {
        let adjusted = entry as i64 - start.offset();
        if adjusted < 0 || adjusted >= total_bits as i64 {
            return Err(CipherError::IndexOutOfRange {
                index: adjusted,
                total_bits,
            });
        }
        let position = match order {
            BitOrder::MostSignificantFirst => adjusted as usize,
            BitOrder::LeastSignificantFirst => total_bits - 1 - adjusted as usize,
        };
        target.set(pad + i, source[position]);
    }

    Ok(output)
}

/// Rotates the bits inside `[start_bit, start_bit + bit_count)` to the left.
///
/// A negative `rotation` rotates right. Bits outside the window are copied
/// through untouched.
pub fn rotate(
    data: &[u8],
    rotation: isize,
    start_bit: usize,
    bit_count: usize,
) -> CipherResult<Vec<u8>> {
    check_window(data, start_bit, bit_count)?;
    let mut output = data.to_vec();
    if bit_count == 0 {
        return Ok(output);
    }

    let amount = rotation.rem_euclid(bit_count as isize) as usize;
    output.view_bits_mut::<Msb0>()[start_bit..start_bit + bit_count].rotate_left(amount);
    Ok(output)
}

/// Logical left shift inside `[start_bit, start_bit + bit_count)`.
///
/// Bits pushed past the front of the window are lost and the back of the
/// window is zero filled. Bits outside the window are copied through.
pub fn shift_left(
    data: &[u8],
    amount: usize,
    start_bit: usize,
    bit_count: usize,
) -> CipherResult<Vec<u8>> {
    check_window(data, start_bit, bit_count)?;
    let mut output = data.to_vec();
    let window = &mut output.view_bits_mut::<Msb0>()[start_bit..start_bit + bit_count];

    if amount >= bit_count {
        window.fill(false);
    } else if amount > 0 {
        window.shift_left(amount);
    }
    Ok(output)
}

/// Packs `len_a` bits of `a` (from `start_a`) followed by `len_b` bits of `b`
/// (from `start_b`) into a fresh MSB-first buffer. Unused trailing bits of
/// the last byte are zero.
pub fn concatenate(
    a: &[u8],
    start_a: usize,
    len_a: usize,
    b: &[u8],
    start_b: usize,
    len_b: usize,
) -> CipherResult<Vec<u8>> {
    check_window(a, start_a, len_a)?;
    check_window(b, start_b, len_b)?;

    let mut packed: BitVec<u8, Msb0> = BitVec::with_capacity(len_a + len_b);
    packed.extend_from_bitslice(&bits(a)[start_a..start_a + len_a]);
    packed.extend_from_bitslice(&bits(b)[start_b..start_b + len_b]);
    packed.set_uninitialized(false);
    Ok(packed.into_vec())
}

/// Byte-wise XOR of two equally sized buffers.
pub fn xor(a: &[u8], b: &[u8]) -> CipherResult<Vec<u8>> {
    if a.len() != b.len() {
        return Err(CipherError::block_size(a.len(), b.len()));
    }
    Ok(a.iter().zip(b).map(|(x, y)| x ^ y).collect())
}

pub(crate) fn xor_in_place(target: &mut [u8], other: &[u8]) {
    for (t, o) in target.iter_mut().zip(other) {
        *t ^= o;
    }
}
