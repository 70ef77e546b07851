//! Growable buffer di atas `Vec<u8>` milik caller
//!
//! Caller tetap memiliki container-nya; setelah `Writer` selesai, byte hasil
//! encode langsung tersedia di `Vec` tersebut tanpa copy tambahan.

use log::trace;

use super::WriteBuffer;
use crate::error::Result;
use crate::span::ConstByteSpan;

/// Growable buffer yang meminjam `Vec<u8>` secara eksklusif
///
/// Byte di-append setelah isi yang sudah ada di container.
pub struct ContainerBuffer<'a> {
    target: &'a mut Vec<u8>,
}

impl<'a> ContainerBuffer<'a> {
    /// Wrap container untuk ditulisi
    pub fn new(target: &'a mut Vec<u8>) -> Self {
        Self { target }
    }

    /// Kapasitas container saat ini
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.target.capacity()
    }

    /// Lepas borrow dan kembalikan container
    pub fn into_inner(self) -> &'a mut Vec<u8> {
        self.target
    }
}

impl WriteBuffer for ContainerBuffer<'_> {
    #[inline]
    fn append(&mut self, bytes: &[u8]) -> Result<()> {
        self.reserve(bytes.len())?;
        self.target.extend_from_slice(bytes);
        Ok(())
    }

    #[inline(always)]
    fn view(&self) -> ConstByteSpan<'_> {
        self.target.as_slice()
    }

    #[inline]
    fn reserve(&mut self, additional: usize) -> Result<()> {
        let before = self.target.capacity();
        WriteBuffer::reserve(&mut *self.target, additional)?;

        let after = self.target.capacity();
        if after != before {
            trace!(
                "container grew from {} to {} bytes (len {})",
                before,
                after,
                self.target.len()
            );
        }
        Ok(())
    }

    #[inline(always)]
    fn truncate(&mut self, len: usize) {
        self.target.truncate(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_grows_target() {
        let mut target = Vec::new();
        {
            let mut buf = ContainerBuffer::new(&mut target);
            for i in 0..100u8 {
                buf.append(&[i; 7]).unwrap();
            }
            assert_eq!(buf.len(), 700);
            assert!(buf.capacity() >= 700);
        }
        assert_eq!(target.len(), 700);
        assert_eq!(&target[693..], &[99u8; 7]);
    }

    #[test]
    fn test_appends_after_existing_contents() {
        let mut target = b"head".to_vec();
        let mut buf = ContainerBuffer::new(&mut target);
        buf.append(b"tail").unwrap();
        assert_eq!(buf.view(), b"headtail");
    }

    #[test]
    fn test_view_tracks_latest_append() {
        let mut target = Vec::new();
        let mut buf = ContainerBuffer::new(&mut target);
        buf.append(b"ab").unwrap();
        assert_eq!(buf.view(), b"ab");
        buf.append(b"cd").unwrap();
        assert_eq!(buf.view(), b"abcd");
    }

    #[test]
    fn test_into_inner() {
        let mut target = Vec::new();
        let mut buf = ContainerBuffer::new(&mut target);
        buf.append(&[1, 2, 3]).unwrap();
        buf.truncate(1);
        assert_eq!(buf.into_inner().as_slice(), &[1]);
    }
}
