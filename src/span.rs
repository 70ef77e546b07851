//! Byte span: view non-owning atas range byte yang contiguous
//!
//! Di Rust, span cukup berupa slice. Lifetime `'a` mengikat span ke buffer
//! sumbernya, jadi span tidak bisa hidup lebih lama dari buffer atau melewati
//! `append` berikutnya (compile error, bukan hazard runtime).

use crate::error::{Error, Result};

/// Tipe ukuran/offset di wire. Selalu 4 bytes, little-endian.
pub type PickleSize = u32;

/// Lebar size field dalam bytes
pub const SIZE_FIELD_WIDTH: usize = std::mem::size_of::<PickleSize>();

/// Span read-only
pub type ConstByteSpan<'a> = &'a [u8];

/// Span writable, dipakai sebagai tujuan decode raw bytes
pub type MutableByteSpan<'a> = &'a mut [u8];

/// Konversi panjang payload ke `PickleSize`
#[inline(always)]
pub fn to_pickle_size(len: usize) -> Result<PickleSize> {
    PickleSize::try_from(len).map_err(|_| Error::LengthOverflow { len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_field_width() {
        assert_eq!(SIZE_FIELD_WIDTH, 4);
    }

    #[test]
    fn test_to_pickle_size() {
        assert_eq!(to_pickle_size(11).unwrap(), 11);
        assert_eq!(
            to_pickle_size(PickleSize::MAX as usize).unwrap(),
            PickleSize::MAX
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_to_pickle_size_overflow() {
        let len = PickleSize::MAX as usize + 1;
        assert_eq!(to_pickle_size(len), Err(Error::LengthOverflow { len }));
    }
}
