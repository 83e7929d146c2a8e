//! Error types for parsing and generation.

use thiserror::Error;

/// Error parsing an invalid string representation of UUID.
///
/// Every variant means the input is not in the 8-4-4-4-12 hexadecimal form; the variants only
/// narrow down where the input went wrong.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input is not exactly 36 bytes long.
    #[error("invalid string representation: expected 36 bytes, got {len}")]
    InvalidLength {
        /// Length of the input in bytes.
        len: usize,
    },

    /// A hyphen is missing at one of the four separator positions.
    #[error("invalid string representation: expected '-' at position {position}")]
    MisplacedHyphen {
        /// Byte offset where the hyphen was expected.
        position: usize,
    },

    /// A digit position holds something other than `0-9`, `a-f`, or `A-F`.
    #[error("invalid string representation: non-hexadecimal character at position {position}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        position: usize,
    },
}

/// Error reading the seed of a generator from its entropy source.
///
/// [`Generator::generate`](crate::Generator::generate) treats this as fatal; only
/// [`Generator::try_generate`](crate::Generator::try_generate) hands it back.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[non_exhaustive]
pub enum EntropyError {
    /// The entropy source could not be read at all.
    #[error("entropy source unavailable (os error {code:?})")]
    Unavailable {
        /// Raw OS error code, if the source reported one.
        code: Option<i32>,
    },

    /// The entropy source returned fewer than 16 bytes.
    ///
    /// The `rand` adapter never reports this, as `try_fill_bytes` fills all or nothing. It is
    /// meant for [`EntropySource`](crate::EntropySource) implementations that read from a device
    /// or a socket and can come up short.
    #[error("short read from entropy source: {read} of 16 bytes")]
    ShortRead {
        /// Number of bytes actually obtained.
        read: usize,
    },
}
