//! Buffers: tempat byte ditulis dan dibaca
//!
//! Prinsip desain:
//! - Write side: buffer append-only, tumbuh otomatis (atau kapasitas tetap)
//! - Read side: slice pinjaman + cursor, satu-satunya pintu untuk membaca byte
//! - Span hanya valid selama borrow ke buffer masih hidup

mod container;
mod fixed;
mod read_only;

pub use container::ContainerBuffer;
pub use fixed::FixedBuffer;
pub use read_only::{ReadOnlyBuffer, ReadOnlyContainerBuffer};

use crate::error::{Error, Result};
use crate::span::ConstByteSpan;

/// Buffer yang bisa di-append oleh `Writer`
///
/// `append` tidak pernah mengecilkan isi buffer. Span dari `view` meminjam
/// buffer, jadi harus diambil ulang setelah `append` berikutnya.
pub trait WriteBuffer {
    /// Copy `bytes` ke akhir buffer
    fn append(&mut self, bytes: &[u8]) -> Result<()>;

    /// Span read-only atas seluruh isi buffer saat ini
    fn view(&self) -> ConstByteSpan<'_>;

    /// Pastikan `additional` bytes bisa di-append tanpa gagal alokasi
    fn reserve(&mut self, additional: usize) -> Result<()>;

    /// Potong isi buffer kembali ke `len` bytes.
    ///
    /// Hanya dipakai untuk membatalkan write yang gagal di tengah jalan;
    /// `len` lebih besar dari panjang saat ini diabaikan.
    fn truncate(&mut self, len: usize);

    /// Jumlah byte yang sudah ditulis
    #[inline(always)]
    fn len(&self) -> usize {
        self.view().len()
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `Vec<u8>` adalah growable buffer yang owned
impl WriteBuffer for Vec<u8> {
    #[inline]
    fn append(&mut self, bytes: &[u8]) -> Result<()> {
        WriteBuffer::reserve(self, bytes.len())?;
        self.extend_from_slice(bytes);
        Ok(())
    }

    #[inline(always)]
    fn view(&self) -> ConstByteSpan<'_> {
        self.as_slice()
    }

    #[inline]
    fn reserve(&mut self, additional: usize) -> Result<()> {
        self.try_reserve(additional)
            .map_err(|_| Error::AllocationFailed {
                requested: additional,
            })
    }

    #[inline(always)]
    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }
}
