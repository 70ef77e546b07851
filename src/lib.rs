//! Nickle - Compact Binary Pickling
//!
//! Arsitektur:
//! - Buffers: growable/fixed write buffer, read-only buffer dengan cursor
//! - Writer/Reader: cursor berurutan, satu call per nilai
//! - Codecs: layout byte tetap per jenis nilai, dipilih saat compile time
//!
//! Format tidak self-describing: tidak ada type tag di stream. Reader harus
//! memanggil `read::<C>` dengan urutan codec yang sama seperti `write::<C>`.
//!
//! ```
//! use nickle::{codecs, ContainerBuffer, ReadOnlyContainerBuffer, Reader, Writer};
//!
//! let mut target = Vec::new();
//! let mut wbuf = ContainerBuffer::new(&mut target);
//! let mut writer = Writer::new(&mut wbuf);
//! writer.write::<codecs::Bool>(true)?;
//! writer.write::<codecs::Int64>(-42)?;
//!
//! let mut rbuf = ReadOnlyContainerBuffer::new(&target);
//! let mut reader = Reader::new(&mut rbuf);
//! assert!(reader.take::<codecs::Bool>()?);
//! assert_eq!(reader.take::<codecs::Int64>()?, -42);
//! reader.finish()?;
//! # Ok::<(), nickle::Error>(())
//! ```

pub mod buffers;
pub mod codecs;
pub mod config;
pub mod error;
pub mod reader;
pub mod span;
pub mod writer;

pub use buffers::{
    ContainerBuffer, FixedBuffer, ReadOnlyBuffer, ReadOnlyContainerBuffer, WriteBuffer,
};
pub use codecs::Codec;
pub use config::DecodeLimits;
pub use error::{Error, ErrorKind, Result};
pub use reader::Reader;
pub use span::{ConstByteSpan, MutableByteSpan, PickleSize, SIZE_FIELD_WIDTH};
pub use writer::Writer;
