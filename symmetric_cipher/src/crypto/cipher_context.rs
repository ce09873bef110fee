use crate::crypto::cipher_io::ChunkReader;
use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::cipher_types::{CipherMode, Operation, PaddingMode};
use crate::crypto::datatypes::{Block, Key, Message};
use crate::crypto::error::{CipherError, CipherResult};
use crate::crypto::padding::{apply_padding, remove_padding};
use crate::crypto::utils::xor_in_place;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::Arc;

/// Blocks per streaming chunk.
const CHUNK_BLOCKS: usize = 1024;

/// Chaining value carried from one block to the next.
///
/// One value per call; streaming threads it across chunks so a streamed
/// result matches the in-memory one.
enum ChainState {
    Ecb,
    Cbc { previous: Vec<u8> },
    Pcbc { previous_plain: Vec<u8>, previous_cipher: Vec<u8> },
    Cfb { previous: Vec<u8> },
    Ofb { keystream: Vec<u8> },
    Ctr { counter: u32 },
}

/// Mode-of-operation engine around one keyed block cipher.
///
/// The context is cheap to clone; clones share the keyed cipher.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn SymmetricCipher>,
    mode: CipherMode,
    padding: PaddingMode,
    iv: Option<Vec<u8>>,
    block_size: usize,
}

impl CipherContext {
    /// Keys `algorithm` with `key` and checks the IV against `mode`.
    ///
    /// CBC, PCBC, CFB and OFB need an IV; when one is given it must match
    /// the cipher block size. `RandomDelta` is accepted here and rejected
    /// on first use.
    pub fn new(
        key: Key,
        mode: CipherMode,
        padding: PaddingMode,
        mut algorithm: Box<dyn SymmetricCipher>,
        iv: Option<Vec<u8>>,
    ) -> CipherResult<Self> {
        let block_size = algorithm.block_size();
        if block_size == 0 {
            return Err(CipherError::Configuration(
                "cipher reports a zero block size".into(),
            ));
        }

        match &iv {
            None if mode.requires_iv() => {
                return Err(CipherError::Configuration(format!(
                    "mode {mode} requires an initialization vector"
                )));
            }
            Some(iv) if iv.len() != block_size => {
                return Err(CipherError::Configuration(format!(
                    "initialization vector is {} bytes, cipher block is {block_size}",
                    iv.len()
                )));
            }
            _ => {}
        }

        algorithm.set_round_keys(&key)?;

        Ok(Self {
            algorithm: Arc::from(algorithm),
            mode,
            padding,
            iv,
            block_size,
        })
    }

    /// Overrides the nominal block size used to split messages and size
    /// streaming chunks. Must be a non-zero multiple of the cipher block.
    pub fn with_block_size(mut self, block_size: usize) -> CipherResult<Self> {
        let cipher_block = self.algorithm.block_size();
        if block_size == 0 || block_size % cipher_block != 0 {
            return Err(CipherError::Configuration(format!(
                "nominal block size {block_size} is not a multiple of the {cipher_block}-byte cipher block"
            )));
        }
        self.block_size = block_size;
        Ok(self)
    }

    /// Re-keys the cipher. Fails while clones of this context are alive.
    pub fn set_key(&mut self, key: &Key) -> CipherResult<()> {
        let algorithm = Arc::get_mut(&mut self.algorithm)
            .ok_or(CipherError::State("cipher is shared with another context"))?;
        algorithm.set_round_keys(key)
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn padding(&self) -> PaddingMode {
        self.padding
    }

    pub fn iv(&self) -> Option<&[u8]> {
        self.iv.as_deref()
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn cipher_block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    fn fresh_state(&self) -> CipherResult<ChainState> {
        let block_size = self.algorithm.block_size();
        let iv = || {
            self.iv
                .clone()
                .ok_or_else(|| CipherError::Configuration(format!("mode {} requires an IV", self.mode)))
        };
        Ok(match self.mode {
            CipherMode::ECB => ChainState::Ecb,
            CipherMode::CBC => ChainState::Cbc { previous: iv()? },
            CipherMode::PCBC => ChainState::Pcbc {
                previous_plain: vec![0u8; block_size],
                previous_cipher: iv()?,
            },
            CipherMode::CFB => ChainState::Cfb { previous: iv()? },
            CipherMode::OFB => ChainState::Ofb { keystream: iv()? },
            CipherMode::CTR => ChainState::Ctr { counter: 0 },
            CipherMode::RandomDelta => return Err(CipherError::UnsupportedMode(self.mode)),
        })
    }

    /// Cipher output must keep the block length the chaining state relies on.
    fn checked_output(&self, block: Block) -> CipherResult<Vec<u8>> {
        let block_size = self.algorithm.block_size();
        if block.len() != block_size {
            return Err(CipherError::block_size(block_size, block.len()));
        }
        Ok(block.into_bytes())
    }

    fn encrypt_raw(&self, data: &[u8]) -> CipherResult<Vec<u8>> {
        let block = self.algorithm.encrypt_block(&Block::from(data))?;
        self.checked_output(block)
    }

    fn decrypt_raw(&self, data: &[u8]) -> CipherResult<Vec<u8>> {
        let block = self.algorithm.decrypt_block(&Block::from(data))?;
        self.checked_output(block)
    }

    fn counter_block(&self, counter: u32) -> Vec<u8> {
        let mut block = vec![0u8; self.algorithm.block_size()];
        let bytes = counter.to_be_bytes();
        let n = block.len().min(bytes.len());
        block[..n].copy_from_slice(&bytes[bytes.len() - n..]);
        block
    }

    fn process_ecb_parallel(&self, data: &[u8], operation: Operation) -> CipherResult<Vec<u8>> {
        let block_size = self.algorithm.block_size();
        let blocks = data
            .par_chunks(block_size)
            .map(|chunk| match operation {
                Operation::Encryption => self.encrypt_raw(chunk),
                Operation::Decryption => self.decrypt_raw(chunk),
            })
            .collect::<CipherResult<Vec<Vec<u8>>>>()?;
        Ok(blocks.concat())
    }

    /// Runs the chaining algorithm over block-aligned `data`.
    fn process_blocks(
        &self,
        data: &[u8],
        state: &mut ChainState,
        operation: Operation,
    ) -> CipherResult<Vec<u8>> {
        let block_size = self.algorithm.block_size();
        if data.len() % block_size != 0 {
            return Err(CipherError::block_size(block_size, data.len() % block_size));
        }
        if let ChainState::Ecb = state {
            return self.process_ecb_parallel(data, operation);
        }

        let mut out = Vec::with_capacity(data.len());
        for input in data.chunks(block_size) {
            let output = match (&mut *state, operation) {
                (ChainState::Ecb, Operation::Encryption) => self.encrypt_raw(input)?,
                (ChainState::Ecb, Operation::Decryption) => self.decrypt_raw(input)?,
                (ChainState::Cbc { previous }, Operation::Encryption) => {
                    let mut mixed = input.to_vec();
                    xor_in_place(&mut mixed, previous);
                    *previous = self.encrypt_raw(&mixed)?;
                    previous.clone()
                }
                (ChainState::Cbc { previous }, Operation::Decryption) => {
                    let mut plain = self.decrypt_raw(input)?;
                    xor_in_place(&mut plain, previous);
                    previous.copy_from_slice(input);
                    plain
                }
                (
                    ChainState::Pcbc { previous_plain, previous_cipher },
                    Operation::Encryption,
                ) => {
                    let mut mixed = input.to_vec();
                    xor_in_place(&mut mixed, previous_plain);
                    xor_in_place(&mut mixed, previous_cipher);
                    let cipher = self.encrypt_raw(&mixed)?;
                    previous_plain.copy_from_slice(input);
                    previous_cipher.copy_from_slice(&cipher);
                    cipher
                }
                (
                    ChainState::Pcbc { previous_plain, previous_cipher },
                    Operation::Decryption,
                ) => {
                    let mut plain = self.decrypt_raw(input)?;
                    xor_in_place(&mut plain, previous_plain);
                    xor_in_place(&mut plain, previous_cipher);
                    previous_plain.copy_from_slice(&plain);
                    previous_cipher.copy_from_slice(input);
                    plain
                }
                (ChainState::Cfb { previous }, _) => {
                    let mut output = self.encrypt_raw(previous)?;
                    xor_in_place(&mut output, input);
                    match operation {
                        Operation::Encryption => previous.copy_from_slice(&output),
                        Operation::Decryption => previous.copy_from_slice(input),
                    }
                    output
                }
                (ChainState::Ofb { keystream }, _) => {
                    *keystream = self.encrypt_raw(keystream)?;
                    let mut output = input.to_vec();
                    xor_in_place(&mut output, keystream);
                    output
                }
                (ChainState::Ctr { counter }, _) => {
                    let mut output = self.encrypt_raw(&self.counter_block(*counter))?;
                    xor_in_place(&mut output, input);
                    *counter = counter.wrapping_add(1);
                    output
                }
            };
            out.extend_from_slice(&output);
        }
        Ok(out)
    }

    pub fn encrypt_bytes(&self, data: &[u8]) -> CipherResult<Vec<u8>> {
        let mut state = self.fresh_state()?;
        let padded = apply_padding(data.to_vec(), self.algorithm.block_size(), self.padding);
        self.process_blocks(&padded, &mut state, Operation::Encryption)
    }

    pub fn decrypt_bytes(&self, data: &[u8]) -> CipherResult<Vec<u8>> {
        let mut state = self.fresh_state()?;
        let plain = self.process_blocks(data, &mut state, Operation::Decryption)?;
        if plain.is_empty() {
            return Ok(plain);
        }
        Ok(remove_padding(plain, self.algorithm.block_size(), self.padding))
    }

    /// Encrypts `message`; the result is split with the message's own
    /// nominal block size.
    pub fn encrypt(&self, message: &Message) -> CipherResult<Message> {
        let ciphertext = self.encrypt_bytes(&message.to_bytes())?;
        Message::from_bytes(&ciphertext, message.block_size())
    }

    pub fn decrypt(&self, message: &Message) -> CipherResult<Message> {
        let plaintext = self.decrypt_bytes(&message.to_bytes())?;
        Message::from_bytes(&plaintext, message.block_size())
    }

    fn chunk_size(&self) -> usize {
        CHUNK_BLOCKS * self.block_size
    }

    /// Encrypts everything `reader` yields into `writer`, one chunk at a
    /// time. Only the final chunk is padded. Returns the bytes written.
    pub fn encrypt_stream<R: Read, W: Write>(&self, reader: R, mut writer: W) -> CipherResult<u64> {
        let mut state = self.fresh_state()?;
        let mut chunks = ChunkReader::new(reader, self.chunk_size());
        let mut written = 0u64;

        while let Some((chunk, last)) = chunks.next_chunk()? {
            let chunk = if last {
                apply_padding(chunk, self.algorithm.block_size(), self.padding)
            } else {
                chunk
            };
            let out = self.process_blocks(&chunk, &mut state, Operation::Encryption)?;
            log::debug!("encrypted chunk of {} bytes (last: {last})", out.len());
            writer.write_all(&out)?;
            written += out.len() as u64;
        }

        writer.flush()?;
        Ok(written)
    }

    /// Inverse of [`encrypt_stream`](Self::encrypt_stream). The input must be
    /// a whole number of cipher blocks.
    pub fn decrypt_stream<R: Read, W: Write>(&self, reader: R, mut writer: W) -> CipherResult<u64> {
        let mut state = self.fresh_state()?;
        let mut chunks = ChunkReader::new(reader, self.chunk_size());
        let mut written = 0u64;

        while let Some((chunk, last)) = chunks.next_chunk()? {
            let mut out = self.process_blocks(&chunk, &mut state, Operation::Decryption)?;
            if last {
                out = remove_padding(out, self.algorithm.block_size(), self.padding);
            }
            log::debug!("decrypted chunk of {} bytes (last: {last})", out.len());
            writer.write_all(&out)?;
            written += out.len() as u64;
        }

        writer.flush()?;
        Ok(written)
    }

    async fn run_file_task<F>(task: F) -> CipherResult<u64>
    where
        F: FnOnce() -> CipherResult<u64> + Send + 'static,
    {
        tokio::task::spawn_blocking(task)
            .await
            .map_err(|e| CipherError::Io(io::Error::other(e)))?
    }

    /// Encrypts the file at `input` into `output` on the blocking pool.
    pub async fn encrypt_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> CipherResult<u64> {
        let this = self.clone();
        let input = input.as_ref().to_path_buf();
        let output = output.as_ref().to_path_buf();
        log::info!(
            "encrypting {} -> {} ({} / {})",
            input.display(),
            output.display(),
            self.mode,
            self.padding
        );

        let written = Self::run_file_task(move || {
            let reader = BufReader::new(File::open(&input)?);
            let writer = BufWriter::new(File::create(&output)?);
            this.encrypt_stream(reader, writer)
        })
        .await?;

        log::info!("encryption finished, {written} bytes written");
        Ok(written)
    }

    /// Decrypts the file at `input` into `output` on the blocking pool.
    pub async fn decrypt_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> CipherResult<u64> {
        let this = self.clone();
        let input = input.as_ref().to_path_buf();
        let output = output.as_ref().to_path_buf();
        log::info!(
            "decrypting {} -> {} ({} / {})",
            input.display(),
            output.display(),
            self.mode,
            self.padding
        );

        let written = Self::run_file_task(move || {
            let reader = BufReader::new(File::open(&input)?);
            let writer = BufWriter::new(File::create(&output)?);
            this.decrypt_stream(reader, writer)
        })
        .await?;

        log::info!("decryption finished, {written} bytes written");
        Ok(written)
    }
}
