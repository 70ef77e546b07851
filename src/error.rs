//! Error types untuk encode/decode
//!
//! Semua kegagalan dikembalikan sebagai `Result`, tidak pernah panic,
//! sehingga parsing input yang tidak dipercaya tidak bisa menghentikan proses.

use crate::span::PickleSize;

/// Kategori kegagalan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Write buffer tidak bisa tumbuh (atau kapasitas tetap habis)
    Allocation,
    /// Byte yang tersisa kurang dari yang dibutuhkan codec
    Truncation,
    /// Byte ada, tapi isinya bukan encoding yang valid
    Format,
}

/// Error tunggal untuk seluruh crate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("failed to allocate {requested} more bytes for the write buffer")]
    AllocationFailed { requested: usize },

    #[error("write of {requested} bytes exceeds the remaining capacity of {available} bytes")]
    CapacityExceeded { requested: usize, available: usize },

    #[error("needed {needed} bytes but only {remaining} remain")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("invalid bool byte {0:#04x}, expected 0x00 or 0x01")]
    InvalidBool(u8),

    #[error("string payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("payload of {len} bytes does not fit in the size field")]
    LengthOverflow { len: usize },

    #[error("length field {len} exceeds the configured limit of {limit}")]
    LengthLimitExceeded { len: PickleSize, limit: PickleSize },

    #[error("{remaining} unread bytes remain after the last value")]
    TrailingBytes { remaining: usize },
}

impl Error {
    /// Kategori error ini
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AllocationFailed { .. } | Self::CapacityExceeded { .. } => ErrorKind::Allocation,
            Self::UnexpectedEof { .. } => ErrorKind::Truncation,
            Self::InvalidBool(_)
            | Self::InvalidUtf8(_)
            | Self::LengthOverflow { .. }
            | Self::LengthLimitExceeded { .. }
            | Self::TrailingBytes { .. } => ErrorKind::Format,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
