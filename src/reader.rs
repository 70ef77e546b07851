//! Reader: decode nilai berurutan dari read-only buffer

use std::any::type_name;

use log::trace;

use crate::buffers::ReadOnlyBuffer;
use crate::codecs::Codec;
use crate::error::{Error, Result};

/// Cursor baca di atas satu `ReadOnlyBuffer`
///
/// Cursor-nya sendiri tinggal di buffer, jadi beberapa `Reader` berurutan
/// di atas buffer yang sama melanjutkan dari posisi terakhir.
pub struct Reader<'b, 'a> {
    buffer: &'b mut ReadOnlyBuffer<'a>,
}

impl<'b, 'a> Reader<'b, 'a> {
    pub fn new(buffer: &'b mut ReadOnlyBuffer<'a>) -> Self {
        Self { buffer }
    }

    /// Decode nilai berikutnya via `C` ke `out`
    ///
    /// Atomic: kalau gagal, `out` tidak berubah dan cursor kembali ke posisi
    /// sebelum call ini. Kalau berhasil, cursor maju tepat sebanyak byte yang
    /// ditulis oleh `Writer::write::<C>` yang bersesuaian.
    #[inline]
    pub fn read<C: Codec>(&mut self, out: &mut C::Output<'a>) -> Result<()> {
        let mark = self.buffer.position();

        let result = C::decode(&mut *self.buffer, out);
        if let Err(err) = &result {
            self.buffer.rewind_to(mark);
            trace!(
                "read via {} failed at offset {}: {}",
                type_name::<C>(),
                mark,
                err
            );
        }
        result
    }

    /// Decode nilai berikutnya dan kembalikan langsung
    #[inline]
    pub fn take<C: Codec>(&mut self) -> Result<C::Output<'a>>
    where
        C::Output<'a>: Sized + Default,
    {
        let mut out: C::Output<'a> = Default::default();
        self.read::<C>(&mut out)?;
        Ok(out)
    }

    /// Remaining bytes
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buffer.remaining()
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self.buffer.position()
    }

    /// Pastikan semua byte sudah dibaca
    pub fn finish(self) -> Result<()> {
        match self.buffer.remaining() {
            0 => Ok(()),
            remaining => Err(Error::TrailingBytes { remaining }),
        }
    }
}
