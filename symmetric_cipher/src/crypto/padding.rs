use crate::crypto::cipher_types::PaddingMode;
use rand::RngCore;

/// Number of bytes needed to bring `len` up to a multiple of `block_size`.
pub fn padding_length(len: usize, block_size: usize) -> usize {
    (block_size - len % block_size) % block_size
}

/// Pads `data` to a multiple of `block_size`.
///
/// An input that is already aligned (including an empty one) gets no
/// padding block for any scheme.
pub fn apply_padding(mut data: Vec<u8>, block_size: usize, padding: PaddingMode) -> Vec<u8> {
    let padding_length = padding_length(data.len(), block_size);
    if padding_length == 0 {
        return data;
    }

    match padding {
        PaddingMode::Zeros => data.resize(data.len() + padding_length, 0),
        PaddingMode::ANSI_X923 => {
            data.resize(data.len() + padding_length - 1, 0);
            data.push(padding_length as u8);
        }
        PaddingMode::PKCS7 => {
            data.resize(data.len() + padding_length, padding_length as u8);
        }
        PaddingMode::ISO10126 => {
            let mut filler = vec![0u8; padding_length - 1];
            rand::rng().fill_bytes(&mut filler);
            data.extend_from_slice(&filler);
            data.push(padding_length as u8);
        }
    }
    data
}

/// Strips padding from decrypted data.
///
/// `Zeros` drops the trailing zero bytes of the last block only, so
/// plaintext whose final block ends in zeros loses them. The length-prefixed schemes trust the final byte; when
/// it claims more than a block (or more than the data holds) the data is
/// returned unchanged on the assumption that no padding was applied. This is
/// a best-effort guess, not an integrity check.
pub fn remove_padding(mut data: Vec<u8>, block_size: usize, padding: PaddingMode) -> Vec<u8> {
    match padding {
        PaddingMode::Zeros => {
            let last_block = data.len().saturating_sub(block_size);
            let kept = data[last_block..]
                .iter()
                .rposition(|&b| b != 0)
                .map_or(last_block, |i| last_block + i + 1);
            data.truncate(kept);
        }
        PaddingMode::ANSI_X923 | PaddingMode::PKCS7 | PaddingMode::ISO10126 => {
            if let Some(&last_byte) = data.last() {
                let pad_len = last_byte as usize;
                if pad_len > block_size || pad_len > data.len() {
                    log::warn!(
                        "{padding} padding byte {pad_len} exceeds block size {block_size}, leaving data as is"
                    );
                    return data;
                }
                data.truncate(data.len() - pad_len);
            }
        }
    }
    data
}
