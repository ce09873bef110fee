use crate::crypto::words::State;

pub const SBOXES: [[u8; 16]; 8] = [
    [3, 8, 15, 1, 10, 6, 5, 11, 14, 13, 4, 2, 7, 0, 9, 12],
    [15, 12, 2, 7, 9, 0, 5, 10, 1, 11, 14, 8, 6, 13, 3, 4],
    [8, 6, 7, 9, 3, 12, 10, 15, 13, 1, 14, 4, 0, 11, 5, 2],
    [0, 15, 11, 8, 12, 9, 6, 3, 13, 1, 2, 4, 10, 7, 5, 14],
    [1, 15, 8, 3, 12, 0, 11, 6, 2, 5, 4, 10, 9, 14, 7, 13],
    [15, 5, 2, 11, 4, 10, 9, 12, 0, 3, 14, 8, 13, 6, 7, 1],
    [7, 2, 12, 5, 8, 4, 6, 11, 14, 9, 1, 15, 13, 3, 10, 0],
    [1, 13, 15, 0, 14, 8, 2, 11, 7, 4, 12, 10, 9, 3, 5, 6],
];

const fn invert(boxes: &[[u8; 16]; 8]) -> [[u8; 16]; 8] {
    let mut inverse = [[0u8; 16]; 8];
    let mut i = 0;
    while i < 8 {
        let mut x = 0;
        while x < 16 {
            inverse[i][boxes[i][x] as usize] = x as u8;
            x += 1;
        }
        i += 1;
    }
    inverse
}

pub const INVERSE_SBOXES: [[u8; 16]; 8] = invert(&SBOXES);

/// Bitsliced application: nibble `j` is bit `j` of each of the four words,
/// word 0 being the low bit.
fn bitslice(table: &[u8; 16], input: &State) -> State {
    let mut output = [0u32; 4];
    for bit in 0..32 {
        let nibble = (0..4).fold(0usize, |acc, k| acc | ((((input[k] >> bit) & 1) as usize) << k));
        let value = table[nibble];
        for (k, word) in output.iter_mut().enumerate() {
            *word |= (((value >> k) & 1) as u32) << bit;
        }
    }
    output
}

pub fn apply_sbox(index: usize, input: &State) -> State {
    bitslice(&SBOXES[index % 8], input)
}

pub fn apply_inverse_sbox(index: usize, input: &State) -> State {
    bitslice(&INVERSE_SBOXES[index % 8], input)
}
