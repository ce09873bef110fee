use symmetric_cipher::CipherError;

/// Serpent state: four 32-bit words, loaded little-endian from 16 bytes.
pub type State = [u32; 4];

pub fn bytes_to_words(bytes: &[u8]) -> Result<State, CipherError> {
    if bytes.len() != 16 {
        return Err(CipherError::InvalidBlockSize {
            expected: 16,
            actual: bytes.len(),
        });
    }
    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(words)
}

pub fn words_to_bytes(words: &State) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}
