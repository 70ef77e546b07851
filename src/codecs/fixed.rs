//! Codec fixed-width: Bool, integer, Float, Double

use super::Codec;
use crate::buffers::{ReadOnlyBuffer, WriteBuffer};
use crate::error::{Error, Result};

/// Bool: 1 byte, `0x00` = false, `0x01` = true
///
/// Byte lain saat decode adalah format error.
#[derive(Debug, Clone, Copy)]
pub enum Bool {}

impl Codec for Bool {
    type Input<'v> = bool;
    type Output<'a> = bool;

    #[inline(always)]
    fn encoded_len(_: &bool) -> usize {
        1
    }

    #[inline(always)]
    fn encode<W: WriteBuffer + ?Sized>(value: bool, dst: &mut W) -> Result<()> {
        dst.append(&[value as u8])
    }

    #[inline(always)]
    fn decode<'a>(src: &mut ReadOnlyBuffer<'a>, out: &mut bool) -> Result<()> {
        let [byte] = src.consume_array::<1>()?;
        *out = match byte {
            0 => false,
            1 => true,
            other => return Err(Error::InvalidBool(other)),
        };
        Ok(())
    }
}

/// Raw bit pattern little-endian, lebar = `size_of::<$ty>()`
macro_rules! fixed_width_codec {
    ($($(#[$meta:meta])* $name:ident => $ty:ty;)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub enum $name {}

        impl Codec for $name {
            type Input<'v> = $ty;
            type Output<'a> = $ty;

            #[inline(always)]
            fn encoded_len(_: &$ty) -> usize {
                std::mem::size_of::<$ty>()
            }

            #[inline(always)]
            fn encode<W: WriteBuffer + ?Sized>(value: $ty, dst: &mut W) -> Result<()> {
                dst.append(&value.to_le_bytes())
            }

            #[inline(always)]
            fn decode<'a>(src: &mut ReadOnlyBuffer<'a>, out: &mut $ty) -> Result<()> {
                *out = <$ty>::from_le_bytes(src.consume_array()?);
                Ok(())
            }
        }
    )*};
}

fixed_width_codec! {
    /// UInt8: 1 byte
    UInt8 => u8;
    /// Int8: 1 byte, two's complement
    Int8 => i8;
    /// UInt16: 2 bytes
    UInt16 => u16;
    /// Int16: 2 bytes, two's complement
    Int16 => i16;
    /// UInt32: 4 bytes
    UInt32 => u32;
    /// Int32: 4 bytes, two's complement
    Int32 => i32;
    /// UInt64: 8 bytes
    UInt64 => u64;
    /// Int64: 8 bytes, two's complement
    Int64 => i64;
    /// Float: 4 bytes, IEEE-754 binary32
    Float => f32;
    /// Double: 8 bytes, IEEE-754 binary64
    Double => f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode<C: Codec>(value: C::Input<'_>) -> Vec<u8> {
        let mut buf: Vec<u8> = Vec::new();
        C::encode(value, &mut buf).unwrap();
        buf
    }

    #[test]
    fn test_bool_layout() {
        assert_eq!(encode::<Bool>(false), [0x00]);
        assert_eq!(encode::<Bool>(true), [0x01]);
    }

    #[test]
    fn test_bool_rejects_other_bytes() {
        let mut src = ReadOnlyBuffer::new(&[0x02]);
        let mut out = true;
        assert_eq!(Bool::decode(&mut src, &mut out), Err(Error::InvalidBool(2)));
        // Output tidak disentuh
        assert!(out);
    }

    #[test]
    fn test_little_endian_layout() {
        assert_eq!(encode::<UInt16>(0x1234), [0x34, 0x12]);
        assert_eq!(encode::<UInt32>(0x0A0B_0C0D), [0x0D, 0x0C, 0x0B, 0x0A]);
        assert_eq!(encode::<Int64>(-2), [0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(encode::<Float>(1.0), 1.0f32.to_bits().to_le_bytes());
        assert_eq!(encode::<Double>(-0.5), (-0.5f64).to_bits().to_le_bytes());
    }

    #[test]
    fn test_encoded_len_matches_width() {
        assert_eq!(Bool::encoded_len(&true), 1);
        assert_eq!(Int8::encoded_len(&-1), 1);
        assert_eq!(Int16::encoded_len(&0), 2);
        assert_eq!(Int32::encoded_len(&0), 4);
        assert_eq!(UInt64::encoded_len(&0), 8);
        assert_eq!(Float::encoded_len(&0.0), 4);
        assert_eq!(Double::encoded_len(&0.0), 8);
    }

    #[test]
    fn test_nan_bit_pattern_preserved() {
        let nan = f64::from_bits(0x7FF8_0000_DEAD_BEEF);
        let bytes = encode::<Double>(nan);

        let mut src = ReadOnlyBuffer::new(&bytes);
        let mut out = 0.0f64;
        Double::decode(&mut src, &mut out).unwrap();
        assert_eq!(out.to_bits(), nan.to_bits());
    }

    #[test]
    fn test_truncated_integer() {
        let mut src = ReadOnlyBuffer::new(&[1, 2, 3]);
        let mut out = 7u32;
        assert_eq!(
            UInt32::decode(&mut src, &mut out),
            Err(Error::UnexpectedEof {
                needed: 4,
                remaining: 3
            })
        );
        assert_eq!(out, 7);
        assert_eq!(src.position(), 0);
    }
}
