/// x^8 + x^6 + x^5 + x^3 + 1, the field of the MDS matrix.
pub const MDS_POLYNOMIAL: u16 = 0x169;
/// x^8 + x^6 + x^3 + x^2 + 1, the field of the RS code.
pub const RS_POLYNOMIAL: u16 = 0x14d;

/// Carry-less multiplication in GF(2^8) reduced by `polynomial`.
pub const fn gf_mul_mod(a: u8, b: u8, polynomial: u16) -> u8 {
    let mut result: u16 = 0;
    let mut a_val = a as u16;
    let mut b_val = b;

    while b_val != 0 {
        if b_val & 1 != 0 {
            result ^= a_val;
        }
        a_val <<= 1;
        if a_val & 0x100 != 0 {
            a_val ^= polynomial;
        }
        b_val >>= 1;
    }

    result as u8
}

pub const fn gf_mul(a: u8, b: u8) -> u8 {
    gf_mul_mod(a, b, MDS_POLYNOMIAL)
}

pub const fn gf_mul_rs(a: u8, b: u8) -> u8 {
    gf_mul_mod(a, b, RS_POLYNOMIAL)
}
