//! Read-only buffer: slice pinjaman + read cursor
//!
//! Semua decode membaca lewat `consume`, satu-satunya tempat bounds check.
//! Invariant: `0 <= cursor <= data.len()`, dan read yang gagal tidak
//! mengubah cursor.

use crate::config::DecodeLimits;
use crate::error::{Error, Result};
use crate::span::{ConstByteSpan, PickleSize, SIZE_FIELD_WIDTH};

/// Zero-copy read buffer
#[derive(Debug, Clone)]
pub struct ReadOnlyBuffer<'a> {
    data: ConstByteSpan<'a>,
    cursor: usize,
    limits: DecodeLimits,
}

/// Nama lama, sesuai pasangan `ContainerBuffer`
pub type ReadOnlyContainerBuffer<'a> = ReadOnlyBuffer<'a>;

impl<'a> ReadOnlyBuffer<'a> {
    /// Membuat read buffer dari byte yang diterima/disimpan
    #[inline(always)]
    pub fn new(data: ConstByteSpan<'a>) -> Self {
        Self::with_limits(data, DecodeLimits::default())
    }

    /// Membuat read buffer dengan batas decode tertentu
    #[inline(always)]
    pub fn with_limits(data: ConstByteSpan<'a>, limits: DecodeLimits) -> Self {
        Self {
            data,
            cursor: 0,
            limits,
        }
    }

    /// Remaining bytes
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Jumlah byte yang sudah dikonsumsi
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.data.len()
    }

    #[inline(always)]
    pub fn limits(&self) -> DecodeLimits {
        self.limits
    }

    /// Byte yang belum dibaca (tidak menggeser cursor)
    #[inline(always)]
    pub fn unread(&self) -> ConstByteSpan<'a> {
        &self.data[self.cursor..]
    }

    /// Ambil `n` byte berikutnya (zero-copy)
    ///
    /// Jika sisa byte kurang dari `n`, gagal dan cursor tidak berubah.
    #[inline(always)]
    pub fn consume(&mut self, n: usize) -> Result<ConstByteSpan<'a>> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(Error::UnexpectedEof {
                needed: n,
                remaining,
            });
        }

        let start = self.cursor;
        self.cursor += n;
        Ok(&self.data[start..self.cursor])
    }

    /// Ambil `N` byte berikutnya sebagai array, untuk codec fixed-width
    #[inline(always)]
    pub fn consume_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.consume(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Ambil payload sized: size field lalu tepat sebanyak itu byte
    ///
    /// Atomic: kalau body gagal, size field juga dikembalikan.
    pub fn consume_sized(&mut self) -> Result<ConstByteSpan<'a>> {
        let start = self.cursor;

        let len = PickleSize::from_le_bytes(self.consume_array::<SIZE_FIELD_WIDTH>()?);
        if len > self.limits.max_sized_len {
            self.cursor = start;
            return Err(Error::LengthLimitExceeded {
                len,
                limit: self.limits.max_sized_len,
            });
        }

        self.consume(len as usize).map_err(|err| {
            self.cursor = start;
            err
        })
    }

    /// Kembalikan cursor ke posisi sebelumnya.
    ///
    /// Posisi di depan cursor saat ini diabaikan, jadi cursor tidak pernah maju lewat sini.
    #[inline(always)]
    pub(crate) fn rewind_to(&mut self, position: usize) {
        self.cursor = self.cursor.min(position);
    }
}

impl<'a> From<&'a [u8]> for ReadOnlyBuffer<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<'a> From<&'a Vec<u8>> for ReadOnlyBuffer<'a> {
    fn from(data: &'a Vec<u8>) -> Self {
        Self::new(data.as_slice())
    }
}
