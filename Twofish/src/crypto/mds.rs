use crate::crypto::gf256::{gf_mul, gf_mul_rs};

pub const MDS: [[u8; 4]; 4] = [
    [0x01, 0xEF, 0x5B, 0x5B],
    [0x5B, 0xEF, 0xEF, 0x01],
    [0xEF, 0x5B, 0x01, 0xEF],
    [0xEF, 0x01, 0xEF, 0x5B],
];

pub const RS: [[u8; 8]; 4] = [
    [0x01, 0xA4, 0x55, 0x87, 0x5A, 0x58, 0xDB, 0x9E],
    [0xA4, 0x56, 0x82, 0xF3, 0x1E, 0xC6, 0x68, 0xE5],
    [0x02, 0xA1, 0xFC, 0xC1, 0x47, 0xAE, 0x3D, 0x19],
    [0xA4, 0x55, 0x87, 0x5A, 0x58, 0xDB, 0x9E, 0x03],
];

/// MDS matrix times the byte vector `y`; output byte `i` lands in bits `8i..8i+8`.
pub fn mds_multiply(y: [u8; 4]) -> u32 {
    MDS.iter().enumerate().fold(0u32, |acc, (i, row)| {
        let byte = row
            .iter()
            .zip(y)
            .fold(0u8, |sum, (&m, v)| sum ^ gf_mul(m, v));
        acc | (byte as u32) << (8 * i)
    })
}

/// RS code word for 8 key bytes, packed little-endian.
pub fn rs_multiply(m: &[u8; 8]) -> u32 {
    RS.iter().enumerate().fold(0u32, |acc, (i, row)| {
        let byte = row
            .iter()
            .zip(m)
            .fold(0u8, |sum, (&r, &v)| sum ^ gf_mul_rs(r, v));
        acc | (byte as u32) << (8 * i)
    })
}
