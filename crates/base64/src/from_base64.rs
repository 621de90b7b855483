//! Standard base64 decoding.

use crate::constants::{DECODE_TABLE, INVALID, PAD_BYTE};
use crate::Base64Error;

/// Decodes a standard base64 string to bytes.
///
/// Padding is optional: an unpadded final quantum of two or three characters
/// is decoded as if the missing `=` were present. When padding is present the
/// total length must be a multiple of four. Unused trailing bits of the final
/// quantum are ignored, so non-canonical encodings decode successfully; compare
/// against a re-encoding if that matters.
///
/// # Errors
///
/// - [`Base64Error::InvalidByte`] for a byte outside the alphabet, including
///   `=` anywhere but the end.
/// - [`Base64Error::InvalidPadding`] for more than two trailing `=`.
/// - [`Base64Error::InvalidLength`] when the length cannot form whole bytes.
///
/// # Example
///
/// ```
/// use b64kit_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// assert_eq!(from_base64("aGVsbG8").unwrap(), b"hello");
/// assert!(from_base64("aGVsbG8!").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let bytes = encoded.as_bytes();
    let length = bytes.len();
    if length == 0 {
        return Ok(Vec::new());
    }

    let padding = bytes.iter().rev().take_while(|&&b| b == PAD_BYTE).count();
    if padding > 2 {
        return Err(Base64Error::InvalidPadding);
    }
    if padding > 0 && length % 4 != 0 {
        return Err(Base64Error::InvalidLength(length));
    }

    let body = &bytes[..length - padding];
    if body.len() % 4 == 1 {
        return Err(Base64Error::InvalidLength(length));
    }

    let mut out = Vec::with_capacity(body.len() / 4 * 3 + 2);
    let mut quads = body.chunks_exact(4);
    let mut offset = 0;

    for quad in quads.by_ref() {
        let s0 = sextet(quad[0], offset)?;
        let s1 = sextet(quad[1], offset + 1)?;
        let s2 = sextet(quad[2], offset + 2)?;
        let s3 = sextet(quad[3], offset + 3)?;
        out.push((s0 << 2) | (s1 >> 4));
        out.push((s1 << 4) | (s2 >> 2));
        out.push((s2 << 6) | s3);
        offset += 4;
    }

    match *quads.remainder() {
        [c0, c1] => {
            let s0 = sextet(c0, offset)?;
            let s1 = sextet(c1, offset + 1)?;
            out.push((s0 << 2) | (s1 >> 4));
        }
        [c0, c1, c2] => {
            let s0 = sextet(c0, offset)?;
            let s1 = sextet(c1, offset + 1)?;
            let s2 = sextet(c2, offset + 2)?;
            out.push((s0 << 2) | (s1 >> 4));
            out.push((s1 << 4) | (s2 >> 2));
        }
        // A single leftover character was rejected above.
        _ => {}
    }

    Ok(out)
}

#[inline]
fn sextet(byte: u8, offset: usize) -> Result<u8, Base64Error> {
    match DECODE_TABLE[byte as usize] {
        INVALID => Err(Base64Error::InvalidByte { offset, byte }),
        value => Ok(value),
    }
}
