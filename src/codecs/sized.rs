//! Codec sized: size field (`PickleSize`, little-endian) + tepat N byte
//!
//! Tidak ada terminator. Zero byte di dalam payload adalah data biasa.

use super::Codec;
use crate::buffers::{ReadOnlyBuffer, WriteBuffer};
use crate::error::Result;
use crate::span::{to_pickle_size, SIZE_FIELD_WIDTH};

#[inline(always)]
fn encode_sized<W: WriteBuffer + ?Sized>(payload: &[u8], dst: &mut W) -> Result<()> {
    let len = to_pickle_size(payload.len())?;
    dst.append(&len.to_le_bytes())?;
    dst.append(payload)
}

/// String owned: decode ke `std::string::String`, payload harus UTF-8
#[derive(Debug, Clone, Copy)]
pub enum String {}

impl Codec for String {
    type Input<'v> = &'v str;
    type Output<'a> = std::string::String;

    #[inline(always)]
    fn encoded_len(value: &&str) -> usize {
        SIZE_FIELD_WIDTH + value.len()
    }

    #[inline(always)]
    fn encode<W: WriteBuffer + ?Sized>(value: &str, dst: &mut W) -> Result<()> {
        encode_sized(value.as_bytes(), dst)
    }

    fn decode<'a>(src: &mut ReadOnlyBuffer<'a>, out: &mut std::string::String) -> Result<()> {
        let text = std::str::from_utf8(src.consume_sized()?)?;
        out.clear();
        out.push_str(text);
        Ok(())
    }
}

/// String view: decode ke `&str` yang meminjam read buffer (zero-copy)
#[derive(Debug, Clone, Copy)]
pub enum StringView {}

impl Codec for StringView {
    type Input<'v> = &'v str;
    type Output<'a> = &'a str;

    #[inline(always)]
    fn encoded_len(value: &&str) -> usize {
        SIZE_FIELD_WIDTH + value.len()
    }

    #[inline(always)]
    fn encode<W: WriteBuffer + ?Sized>(value: &str, dst: &mut W) -> Result<()> {
        encode_sized(value.as_bytes(), dst)
    }

    #[inline(always)]
    fn decode<'a>(src: &mut ReadOnlyBuffer<'a>, out: &mut &'a str) -> Result<()> {
        *out = std::str::from_utf8(src.consume_sized()?)?;
        Ok(())
    }
}

/// Byte sized owned: decode ke `Vec<u8>`, isi bebas
#[derive(Debug, Clone, Copy)]
pub enum Bytes {}

impl Codec for Bytes {
    type Input<'v> = &'v [u8];
    type Output<'a> = Vec<u8>;

    #[inline(always)]
    fn encoded_len(value: &&[u8]) -> usize {
        SIZE_FIELD_WIDTH + value.len()
    }

    #[inline(always)]
    fn encode<W: WriteBuffer + ?Sized>(value: &[u8], dst: &mut W) -> Result<()> {
        encode_sized(value, dst)
    }

    fn decode<'a>(src: &mut ReadOnlyBuffer<'a>, out: &mut Vec<u8>) -> Result<()> {
        let payload = src.consume_sized()?;
        out.clear();
        out.extend_from_slice(payload);
        Ok(())
    }
}

/// Byte sized view: decode ke `&[u8]` yang meminjam read buffer
#[derive(Debug, Clone, Copy)]
pub enum BytesView {}

impl Codec for BytesView {
    type Input<'v> = &'v [u8];
    type Output<'a> = &'a [u8];

    #[inline(always)]
    fn encoded_len(value: &&[u8]) -> usize {
        SIZE_FIELD_WIDTH + value.len()
    }

    #[inline(always)]
    fn encode<W: WriteBuffer + ?Sized>(value: &[u8], dst: &mut W) -> Result<()> {
        encode_sized(value, dst)
    }

    #[inline(always)]
    fn decode<'a>(src: &mut ReadOnlyBuffer<'a>, out: &mut &'a [u8]) -> Result<()> {
        *out = src.consume_sized()?;
        Ok(())
    }
}
