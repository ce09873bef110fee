use crate::crypto::mds::mds_multiply;

const Q0_T: [[u8; 16]; 4] = [
    [0x8, 0x1, 0x7, 0xD, 0x6, 0xF, 0x3, 0x2, 0x0, 0xB, 0x5, 0x9, 0xE, 0xC, 0xA, 0x4],
    [0xE, 0xC, 0xB, 0x8, 0x1, 0x2, 0x3, 0x5, 0xF, 0x4, 0xA, 0x6, 0x7, 0x0, 0x9, 0xD],
    [0xB, 0xA, 0x5, 0xE, 0x6, 0xD, 0x9, 0x0, 0xC, 0x8, 0xF, 0x3, 0x2, 0x4, 0x7, 0x1],
    [0xD, 0x7, 0xF, 0x4, 0x1, 0x2, 0x6, 0xE, 0x9, 0xB, 0x3, 0x0, 0x8, 0x5, 0xC, 0xA],
];

const Q1_T: [[u8; 16]; 4] = [
    [0x2, 0x8, 0xB, 0xD, 0xF, 0x7, 0x6, 0xE, 0x3, 0x1, 0x9, 0x4, 0x0, 0xA, 0xC, 0x5],
    [0x1, 0xE, 0x2, 0xB, 0x4, 0xC, 0x3, 0x7, 0x6, 0xD, 0xA, 0x5, 0xF, 0x9, 0x0, 0x8],
    [0x4, 0xC, 0x7, 0x5, 0x1, 0x6, 0x9, 0xA, 0x0, 0xE, 0xD, 0x8, 0x2, 0xB, 0x3, 0xF],
    [0xB, 0x9, 0x5, 0x1, 0xC, 0x3, 0xD, 0xE, 0x6, 0x4, 0x7, 0xF, 0x2, 0x0, 0x8, 0xA],
];

const fn ror4(x: u8, n: u32) -> u8 {
    ((x >> n) | (x << (4 - n))) & 0xF
}

const fn q_permutation(t: &[[u8; 16]; 4], x: u8) -> u8 {
    let (a0, b0) = (x >> 4, x & 0xF);
    let a1 = a0 ^ b0;
    let b1 = (a0 ^ ror4(b0, 1) ^ (a0 << 3)) & 0xF;
    let (a2, b2) = (t[0][a1 as usize], t[1][b1 as usize]);
    let a3 = a2 ^ b2;
    let b3 = (a2 ^ ror4(b2, 1) ^ (a2 << 3)) & 0xF;
    let (a4, b4) = (t[2][a3 as usize], t[3][b3 as usize]);
    (b4 << 4) | a4
}

const fn build_table(t: &[[u8; 16]; 4]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = q_permutation(t, i as u8);
        i += 1;
    }
    table
}

static Q0: [u8; 256] = build_table(&Q0_T);
static Q1: [u8; 256] = build_table(&Q1_T);

pub fn q0(x: u8) -> u8 {
    Q0[x as usize]
}

pub fn q1(x: u8) -> u8 {
    Q1[x as usize]
}

/// The `h` function: key-dependent S-boxes followed by the MDS matrix.
///
/// `list` holds 2, 3 or 4 key words; `list[0]` is applied last.
pub fn h(x: u32, list: &[u32]) -> u32 {
    let key = |word: usize, byte: usize| list[word].to_le_bytes()[byte];
    let [mut y0, mut y1, mut y2, mut y3] = x.to_le_bytes();

    if list.len() == 4 {
        y0 = q1(y0) ^ key(3, 0);
        y1 = q0(y1) ^ key(3, 1);
        y2 = q0(y2) ^ key(3, 2);
        y3 = q1(y3) ^ key(3, 3);
    }
    if list.len() >= 3 {
        y0 = q1(y0) ^ key(2, 0);
        y1 = q1(y1) ^ key(2, 1);
        y2 = q0(y2) ^ key(2, 2);
        y3 = q0(y3) ^ key(2, 3);
    }

    y0 = q1(q0(q0(y0) ^ key(1, 0)) ^ key(0, 0));
    y1 = q0(q0(q1(y1) ^ key(1, 1)) ^ key(0, 1));
    y2 = q1(q1(q0(y2) ^ key(1, 2)) ^ key(0, 2));
    y3 = q0(q1(q1(y3) ^ key(1, 3)) ^ key(0, 3));

    mds_multiply([y0, y1, y2, y3])
}
