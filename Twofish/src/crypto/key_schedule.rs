use crate::crypto::mds::rs_multiply;
use crate::crypto::pht::pht;
use crate::crypto::sboxes::h;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;
use symmetric_cipher::{CipherError, CipherResult, Key, RoundKey};

const RHO: u32 = 0x0101_0101;
pub const SUBKEY_COUNT: usize = 40;
pub const ROUNDS: usize = 16;

fn check_key(key: &[u8]) -> CipherResult<usize> {
    match key.len() {
        16 | 24 | 32 => Ok(key.len() / 8),
        actual => Err(CipherError::InvalidKeySize {
            expected: "16, 24 or 32",
            actual,
        }),
    }
}

fn le_words(key: &[u8]) -> Vec<u32> {
    key.chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

/// Words of the key-dependent S-boxes, `S_{k-1}..S_0` in the order `h` expects.
pub fn sbox_key_words(key: &[u8]) -> CipherResult<Vec<u32>> {
    check_key(key)?;
    let mut words: Vec<u32> = key
        .chunks_exact(8)
        .map(|chunk| {
            let mut m = [0u8; 8];
            m.copy_from_slice(chunk);
            rs_multiply(&m)
        })
        .collect();
    words.reverse();
    Ok(words)
}

/// The 40 expanded key words `K_0..K_39`.
pub fn expand_key(key: &[u8]) -> CipherResult<[u32; SUBKEY_COUNT]> {
    check_key(key)?;
    let words = le_words(key);
    let even: Vec<u32> = words.iter().step_by(2).copied().collect();
    let odd: Vec<u32> = words.iter().skip(1).step_by(2).copied().collect();

    let mut subkeys = [0u32; SUBKEY_COUNT];
    for i in 0..SUBKEY_COUNT / 2 {
        let n = i as u32;
        let a = h(2 * n * RHO, &even);
        let b = h((2 * n + 1) * RHO, &odd).rotate_left(8);
        let (k0, k1) = pht(a, b);
        subkeys[2 * i] = k0;
        subkeys[2 * i + 1] = k1.rotate_left(9);
    }
    Ok(subkeys)
}

fn pack(words: &[u32]) -> RoundKey {
    RoundKey::from(words.iter().flat_map(|w| w.to_le_bytes()).collect::<Vec<u8>>())
}

/// Twofish subkeys grouped as round keys.
///
/// Index 0 is the input whitening key (`K_0..K_3`), index 1 the output
/// whitening key (`K_4..K_7`), and index `2 + r` the pair
/// `K_{2r+8}, K_{2r+9}` used by round `r`.
pub struct TwofishKeyExpansion;

impl KeyExpansion for TwofishKeyExpansion {
    fn generate_round_keys(&self, key: &Key) -> CipherResult<Vec<RoundKey>> {
        let subkeys = expand_key(key.as_bytes())?;
        let mut round_keys = Vec::with_capacity(2 + ROUNDS);
        round_keys.push(pack(&subkeys[0..4]));
        round_keys.push(pack(&subkeys[4..8]));
        round_keys.extend(subkeys[8..].chunks_exact(2).map(pack));
        log::debug!("derived twofish subkeys for a {}-byte key", key.len());
        Ok(round_keys)
    }
}
