use crate::crypto::error::{CipherError, CipherResult};

macro_rules! byte_buffer {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Default)]
        pub struct $name(Vec<u8>);

        impl $name {
            pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
                Self(bytes.into())
            }

            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            pub fn into_bytes(self) -> Vec<u8> {
                self.0
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<Vec<u8>> for $name {
            fn from(bytes: Vec<u8>) -> Self {
                Self(bytes)
            }
        }

        impl From<&[u8]> for $name {
            fn from(bytes: &[u8]) -> Self {
                Self(bytes.to_vec())
            }
        }

        impl<const N: usize> From<[u8; N]> for $name {
            fn from(bytes: [u8; N]) -> Self {
                Self(bytes.to_vec())
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

byte_buffer! {
    /// One unit of plaintext or ciphertext.
    Block
}

byte_buffer! {
    /// Raw secret material. Its length picks the cipher variant.
    Key
}

byte_buffer! {
    /// Per-round secret derived from a [`Key`]. Opaque to the round engines.
    RoundKey
}

impl Key {
    pub fn size(&self) -> usize {
        self.0.len()
    }
}

// Keys and round keys stay out of logs.
impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Key({} bytes)", self.0.len())
    }
}

impl std::fmt::Debug for RoundKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RoundKey({} bytes)", self.0.len())
    }
}

impl std::fmt::Debug for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Block(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// Ordered blocks plus the nominal size used to split them.
///
/// Every block but the last holds exactly `block_size` bytes. The last one
/// may be shorter until padding brings it up to the cipher block size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    blocks: Vec<Block>,
    block_size: usize,
}

impl Message {
    pub fn from_bytes(data: &[u8], block_size: usize) -> CipherResult<Self> {
        if block_size == 0 {
            return Err(CipherError::Configuration(
                "message block size must be non-zero".into(),
            ));
        }
        let blocks = data.chunks(block_size).map(Block::from).collect();
        Ok(Self { blocks, block_size })
    }

    pub fn from_blocks(blocks: Vec<Block>, block_size: usize) -> CipherResult<Self> {
        if block_size == 0 {
            return Err(CipherError::Configuration(
                "message block size must be non-zero".into(),
            ));
        }
        if let Some((last, body)) = blocks.split_last() {
            if let Some(bad) = body.iter().find(|b| b.len() != block_size) {
                return Err(CipherError::block_size(block_size, bad.len()));
            }
            if last.is_empty() || last.len() > block_size {
                return Err(CipherError::block_size(block_size, last.len()));
            }
        }
        Ok(Self { blocks, block_size })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn byte_len(&self) -> usize {
        self.blocks.iter().map(Block::len).sum()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len());
        for block in &self.blocks {
            out.extend_from_slice(block.as_bytes());
        }
        out
    }
}
