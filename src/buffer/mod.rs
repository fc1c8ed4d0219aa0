//! Wire buffers
//!
//! `WriteBuffer` and `ReadBuffer` wrap `bytes` with explicit cursors. The
//! frame encoders write the body first and back-patch the 16-byte header
//! once the body length is known, so writes at the cursor overwrite
//! existing bytes before extending past the end.

use bytes::{Bytes, BytesMut};
use std::io;
use thiserror::Error;

/// Buffer errors
#[derive(Error, Debug)]
pub enum BufferError {
    #[error("read past end of buffer: wanted {wanted}, {remaining} remaining")]
    Exhausted { wanted: usize, remaining: usize },
}

/// Growable write buffer with an explicit write cursor.
#[derive(Debug, Default)]
pub struct WriteBuffer {
    buf: BytesMut,
    pos: usize,
}

impl WriteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(cap),
            pos: 0,
        }
    }

    /// Bytes written so far (the high-water mark, not the cursor).
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current write cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the write cursor. Seeking past the written length zero-fills the
    /// gap, which is how encoders reserve the header region up front.
    pub fn set_position(&mut self, pos: usize) {
        if pos > self.buf.len() {
            self.buf.resize(pos, 0);
        }
        self.pos = pos;
    }

    /// Write at the cursor, overwriting existing bytes and extending past
    /// the end.
    pub fn write_slice(&mut self, src: &[u8]) {
        if self.pos < self.buf.len() {
            let overlap = src.len().min(self.buf.len() - self.pos);
            self.buf[self.pos..self.pos + overlap].copy_from_slice(&src[..overlap]);
            self.buf.extend_from_slice(&src[overlap..]);
        } else {
            self.buf.extend_from_slice(src);
        }
        self.pos += src.len();
    }

    pub fn write_u8(&mut self, byte: u8) {
        self.write_slice(&[byte]);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Finished frame as immutable bytes.
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}

impl io::Write for WriteBuffer {
    fn write(&mut self, src: &[u8]) -> io::Result<usize> {
        self.write_slice(src);
        Ok(src.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Bounded read buffer with a read cursor.
#[derive(Debug)]
pub struct ReadBuffer {
    buf: Bytes,
    pos: usize,
}

impl ReadBuffer {
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self {
            buf: buf.into(),
            pos: 0,
        }
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn read_u8(&mut self) -> Result<u8, BufferError> {
        if self.remaining() == 0 {
            return Err(BufferError::Exhausted {
                wanted: 1,
                remaining: 0,
            });
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_slice(&mut self, len: usize) -> Result<&[u8], BufferError> {
        if self.remaining() < len {
            return Err(BufferError::Exhausted {
                wanted: len,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }
}

impl io::Read for ReadBuffer {
    fn read(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        let len = dst.len().min(self.remaining());
        dst[..len].copy_from_slice(&self.buf[self.pos..self.pos + len]);
        self.pos += len;
        Ok(len)
    }
}
