//! Base64 encoding and decoding primitives.
//!
//! This crate provides the RFC 4648 §4 codec the transcoder is built on:
//! - Standard alphabet with `=` padding on encode
//! - Decoding that accepts padded and unpadded input
//! - Byte-offset error reporting for rejected input
//!
//! Alphabet variants (URL-safe) and output formatting are handled a layer
//! up, in `b64kit`.
//!
//! # Example
//!
//! ```
//! use b64kit_base64::{from_base64, to_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod from_base64;
mod to_base64;

pub use constants::{is_alphabet_byte, ALPHABET, ALPHABET_BYTES, PAD};
pub use from_base64::from_base64;
pub use to_base64::{encode_into, encoded_len, to_base64};

/// Error type for base64 decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// A byte outside the standard alphabet, or `=` before the end.
    #[error("invalid base64 byte 0x{byte:02x} at offset {offset}")]
    InvalidByte { offset: usize, byte: u8 },
    /// More than two trailing `=` characters.
    #[error("too many base64 padding characters")]
    InvalidPadding,
    /// The input length cannot be decoded into whole bytes.
    #[error("invalid base64 length {0}")]
    InvalidLength(usize),
}
