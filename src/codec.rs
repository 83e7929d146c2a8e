//! Conversion between [`Uuid`] and the 8-4-4-4-12 canonical hexadecimal string representation.
//!
//! ```rust
//! use hashuuid::{codec, Uuid};
//!
//! let text = "00000000-0000-0000-0000-000000000000";
//! assert_eq!(codec::decode(text), Ok(Uuid::nil()));
//! assert_eq!(&codec::encode(&Uuid::nil()) as &str, text);
//! assert!(!codec::is_valid_format("00000000-0000-0000-0000-00000000000"));
//! ```

use core::fmt;

use fstr::FStr;

use crate::{ParseError, Uuid};

/// Length of the canonical string representation.
pub const ENCODED_LEN: usize = 36;

/// Byte offsets of the four hyphens in the canonical string representation.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Encodes a UUID into the 8-4-4-4-12 lowercase hexadecimal string representation.
pub fn encode(uuid: &Uuid) -> FStr<ENCODED_LEN> {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut buffer = [b'-'; ENCODED_LEN];
    let mut buf_iter = (0..ENCODED_LEN).filter(|i| !HYPHENS.contains(i));
    for &e in uuid.as_bytes() {
        if let (Some(hi), Some(lo)) = (buf_iter.next(), buf_iter.next()) {
            buffer[hi] = DIGITS[(e >> 4) as usize];
            buffer[lo] = DIGITS[(e & 15) as usize];
        }
    }
    debug_assert!(buf_iter.next().is_none());
    debug_assert!(buffer.is_ascii());
    // SAFETY: the buffer consists of ASCII hex digits and hyphens only.
    unsafe { FStr::from_bytes_unchecked(buffer) }
}

/// Decodes the 8-4-4-4-12 hexadecimal string representation into a UUID.
///
/// Hex digits are accepted in either case. Every hyphen must sit exactly at its own position;
/// the input is rejected as a whole, so a failure never yields a partially filled UUID.
pub fn decode(src: &str) -> Result<Uuid, ParseError> {
    let src = src.as_bytes();
    if src.len() != ENCODED_LEN {
        return Err(ParseError::InvalidLength { len: src.len() });
    }

    let mut dst = [0u8; 16];
    let mut nibbles = 0;
    for (position, &c) in src.iter().enumerate() {
        if HYPHENS.contains(&position) {
            if c != b'-' {
                return Err(ParseError::MisplacedHyphen { position });
            }
            continue;
        }

        let digit = char::from(c)
            .to_digit(16)
            .ok_or(ParseError::InvalidDigit { position })? as u8;
        dst[nibbles / 2] |= if nibbles % 2 == 0 { digit << 4 } else { digit };
        nibbles += 1;
    }
    debug_assert_eq!(nibbles, 32);
    Ok(Uuid::from(dst))
}

/// Returns `true` if [`decode`] would accept `src`.
pub fn is_valid_format(src: &str) -> bool {
    decode(src).is_ok()
}

/// Appends the canonical string representation of `uuid` to a text sink.
///
/// # Examples
///
/// ```rust
/// use hashuuid::{codec, Uuid};
///
/// let mut log = String::from("table ");
/// codec::write_to(&mut log, &Uuid::nil())?;
/// assert_eq!(log, "table 00000000-0000-0000-0000-000000000000");
/// # Ok::<(), core::fmt::Error>(())
/// ```
pub fn write_to<W: fmt::Write + ?Sized>(sink: &mut W, uuid: &Uuid) -> fmt::Result {
    sink.write_str(&encode(uuid))
}
