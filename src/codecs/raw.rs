//! Codec unsized: N byte verbatim tanpa size field
//!
//! N tidak disimpan di stream. Kedua sisi sudah sepakat (misalnya field
//! record dengan ukuran tetap), dan decode butuh span tujuan berukuran tepat N.

use super::Codec;
use crate::buffers::{ReadOnlyBuffer, WriteBuffer};
use crate::error::Result;
use crate::span::MutableByteSpan;

#[derive(Debug, Clone, Copy)]
pub enum UnsizedSpan {}

impl Codec for UnsizedSpan {
    type Input<'v> = &'v [u8];
    type Output<'a> = [u8];

    #[inline(always)]
    fn encoded_len(value: &&[u8]) -> usize {
        value.len()
    }

    #[inline(always)]
    fn encode<W: WriteBuffer + ?Sized>(value: &[u8], dst: &mut W) -> Result<()> {
        dst.append(value)
    }

    #[inline(always)]
    fn decode<'a>(src: &mut ReadOnlyBuffer<'a>, out: MutableByteSpan<'_>) -> Result<()> {
        out.copy_from_slice(src.consume(out.len())?);
        Ok(())
    }
}
