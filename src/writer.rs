//! Writer: encode nilai berurutan ke write buffer

use std::any::type_name;

use log::trace;

use crate::buffers::WriteBuffer;
use crate::codecs::Codec;
use crate::error::Result;

/// Cursor tulis di atas satu `WriteBuffer`, dipinjam eksklusif
pub struct Writer<'b, B: WriteBuffer + ?Sized> {
    buffer: &'b mut B,
}

impl<'b, B: WriteBuffer + ?Sized> Writer<'b, B> {
    pub fn new(buffer: &'b mut B) -> Self {
        Self { buffer }
    }

    /// Encode `value` via `C` lalu append ke buffer
    ///
    /// Kalau gagal, buffer dikembalikan ke panjang sebelum call ini,
    /// jadi tidak ada nilai setengah jadi di buffer.
    #[inline]
    pub fn write<C: Codec>(&mut self, value: C::Input<'_>) -> Result<()> {
        let mark = self.buffer.len();

        let result = self
            .buffer
            .reserve(C::encoded_len(&value))
            .and_then(|()| C::encode(value, &mut *self.buffer));

        if let Err(err) = &result {
            self.buffer.truncate(mark);
            trace!(
                "write via {} failed at offset {}: {}",
                type_name::<C>(),
                mark,
                err
            );
        }
        result
    }

    /// Jumlah byte di buffer saat ini
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Byte hasil encode sejauh ini
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.view()
    }

    /// Selesai menulis, kembalikan buffer
    pub fn into_inner(self) -> &'b mut B {
        self.buffer
    }
}
