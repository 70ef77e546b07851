//! Konfigurasi decode untuk input yang tidak dipercaya

use crate::span::PickleSize;

/// Batas yang diterapkan saat decode
///
/// Default tidak menambah batas apa pun selain lebar size field itu sendiri.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Panjang maksimum payload sized (String, Bytes, ...)
    pub max_sized_len: PickleSize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_sized_len: PickleSize::MAX,
        }
    }
}

impl DecodeLimits {
    /// Set panjang maksimum payload sized
    pub fn with_max_sized_len(mut self, max_sized_len: PickleSize) -> Self {
        self.max_sized_len = max_sized_len;
        self
    }
}
