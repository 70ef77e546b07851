//! Codec set: layout byte untuk setiap jenis nilai
//!
//! Wire format:
//! - Semua numeric fixed-width ditulis **little-endian**
//! - Float/Double: bit pattern IEEE-754 (binary32/binary64)
//! - Bool: satu byte, `0x00` atau `0x01`
//! - Sized payload: size field `u32` little-endian + tepat N byte
//! - Unsized span: N byte apa adanya, N disepakati di luar stream
//!
//! Tidak ada type tag. Reader harus memakai urutan codec yang sama
//! dengan Writer.
//!
//! Codec adalah marker type tanpa nilai (`enum` kosong), dipilih per call
//! site saat compile time:
//!
//! ```
//! use nickle::{codecs, ContainerBuffer, ReadOnlyBuffer, Reader, Writer};
//!
//! let mut target = Vec::new();
//! let mut wbuf = ContainerBuffer::new(&mut target);
//! let mut writer = Writer::new(&mut wbuf);
//! writer.write::<codecs::UInt16>(32123)?;
//! writer.write::<codecs::StringView>("Hello world")?;
//!
//! let mut rbuf = ReadOnlyBuffer::new(&target);
//! let mut reader = Reader::new(&mut rbuf);
//! let mut number = 0u16;
//! let mut text = "";
//! reader.read::<codecs::UInt16>(&mut number)?;
//! reader.read::<codecs::StringView>(&mut text)?;
//! assert_eq!(number, 32123);
//! assert_eq!(text, "Hello world");
//! # Ok::<(), nickle::Error>(())
//! ```

mod fixed;
mod raw;
mod sized;

pub use fixed::{Bool, Double, Float, Int16, Int32, Int64, Int8, UInt16, UInt32, UInt64, UInt8};
pub use raw::UnsizedSpan;
pub use sized::{Bytes, BytesView, String, StringView};

use crate::buffers::{ReadOnlyBuffer, WriteBuffer};
use crate::error::Result;

/// Pasangan encode/decode stateless untuk satu jenis nilai
///
/// `Input<'v>` adalah nilai yang di-encode. `Output<'a>` adalah tujuan decode
/// dan boleh meminjam dari read buffer selama `'a` (zero-copy view).
pub trait Codec {
    type Input<'v>;
    type Output<'a>: ?Sized;

    /// Jumlah byte yang akan di-append oleh `encode`
    fn encoded_len(value: &Self::Input<'_>) -> usize;

    /// Encode `value` lalu append ke `dst`
    fn encode<W: WriteBuffer + ?Sized>(value: Self::Input<'_>, dst: &mut W) -> Result<()>;

    /// Decode nilai berikutnya dari `src` ke `out`.
    ///
    /// `out` hanya ditulis kalau decode berhasil. Atomicity cursor dijamin
    /// oleh `Reader`; pemanggil langsung harus rewind sendiri.
    fn decode<'a>(src: &mut ReadOnlyBuffer<'a>, out: &mut Self::Output<'a>) -> Result<()>;
}
