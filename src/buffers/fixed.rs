//! Pre-allocated write buffer
//!
//! Alokasi hanya terjadi sekali saat inisialisasi.
//! Append yang melebihi kapasitas gagal, tidak pernah realokasi.

use super::WriteBuffer;
use crate::error::{Error, Result};
use crate::span::ConstByteSpan;

/// Write buffer dengan kapasitas tetap
pub struct FixedBuffer {
    buffer: Box<[u8]>,
    write_pos: usize,
}

impl FixedBuffer {
    /// Membuat buffer dengan kapasitas tertentu
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0u8; capacity].into_boxed_slice(),
            write_pos: 0,
        }
    }

    /// Reset buffer untuk reuse
    #[inline(always)]
    pub fn reset(&mut self) {
        self.write_pos = 0;
    }

    /// Get current buffer content
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.write_pos]
    }

    /// Available space in buffer
    #[inline(always)]
    pub fn available(&self) -> usize {
        self.buffer.len() - self.write_pos
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }
}

impl WriteBuffer for FixedBuffer {
    #[inline(always)]
    fn append(&mut self, bytes: &[u8]) -> Result<()> {
        self.reserve(bytes.len())?;

        let end = self.write_pos + bytes.len();
        self.buffer[self.write_pos..end].copy_from_slice(bytes);
        self.write_pos = end;

        Ok(())
    }

    #[inline(always)]
    fn view(&self) -> ConstByteSpan<'_> {
        self.as_bytes()
    }

    #[inline(always)]
    fn reserve(&mut self, additional: usize) -> Result<()> {
        let available = self.available();
        if additional > available {
            return Err(Error::CapacityExceeded {
                requested: additional,
                available,
            });
        }
        Ok(())
    }

    #[inline(always)]
    fn truncate(&mut self, len: usize) {
        self.write_pos = self.write_pos.min(len);
    }
}
