//! Base64 to text.

use b64kit_base64::{from_base64, Base64Error};

use crate::normalize::normalize;
use crate::options::{ConversionOptions, Mode};

/// Failure while decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The round-trip validator turned the input down.
    #[error("Input is not valid Base64")]
    Rejected,
    /// The normalized input is not a Base64 byte sequence.
    #[error("Invalid Base64 input - cannot decode")]
    Malformed(#[from] Base64Error),
}

/// Decodes `base64` to text under `opts`.
///
/// The input is normalized first (see [`normalize`]). Missing padding is
/// tolerated whether or not `add_padding` is set. The decoded bytes are read
/// as UTF-8; invalid sequences become U+FFFD.
///
/// # Example
///
/// ```
/// use b64kit::{decode, ConversionOptions};
///
/// let opts = ConversionOptions::decode();
/// assert_eq!(decode("SGVsbG8=", &opts).unwrap(), "Hello");
/// assert!(decode("SGVsbG8!", &opts).is_err());
/// ```
pub fn decode(base64: &str, opts: &ConversionOptions) -> Result<String, DecodeError> {
    let normalized = normalize(base64, opts, Mode::Decode);
    let bytes = from_base64(&normalized)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
