use std::io::{self, ErrorKind, Read};

/// Reads fixed-size chunks and flags the last one.
///
/// A chunk is final when it comes back short or when the next read hits end
/// of input, so an input that is an exact multiple of the chunk size still
/// reports its last chunk.
pub(crate) struct ChunkReader<R> {
    reader: R,
    chunk_size: usize,
    pending: Option<Vec<u8>>,
    started: bool,
}

impl<R: Read> ChunkReader<R> {
    pub(crate) fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size,
            pending: None,
            started: false,
        }
    }

    fn fill(&mut self) -> io::Result<Vec<u8>> {
        let mut buffer = vec![0u8; self.chunk_size];
        let mut filled = 0;
        while filled < self.chunk_size {
            match self.reader.read(&mut buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        buffer.truncate(filled);
        Ok(buffer)
    }

    /// Next chunk and whether it is the last one. `None` once input is drained.
    pub(crate) fn next_chunk(&mut self) -> io::Result<Option<(Vec<u8>, bool)>> {
        if !self.started {
            self.started = true;
            let first = self.fill()?;
            if !first.is_empty() {
                self.pending = Some(first);
            }
        }

        let Some(current) = self.pending.take() else {
            return Ok(None);
        };
        if current.len() < self.chunk_size {
            return Ok(Some((current, true)));
        }

        let lookahead = self.fill()?;
        if lookahead.is_empty() {
            return Ok(Some((current, true)));
        }
        self.pending = Some(lookahead);
        Ok(Some((current, false)))
    }
}
