//! Round-trip validation of Base64 input.
//!
//! A character-class check alone accepts strings that are well formed but
//! carry stray bits in the final quantum (`SGVsbG9=` decodes to the same bytes
//! as `SGVsbG8=`). Decoding and re-encoding catches those deterministically.

use b64kit_base64::{from_base64, is_alphabet_byte, to_base64, PAD};

use crate::normalize::normalize;
use crate::options::{ConversionOptions, Mode};

/// Returns `true` if `candidate` is acceptable Base64 under `opts`.
///
/// The candidate is normalized as for decoding, checked against
/// `[A-Za-z0-9+/]*={0,2}`, then decoded and re-encoded. It is accepted when
/// the re-encoding equals the normalized text, or equals it plus the one or
/// two `=` the input left out.
///
/// # Example
///
/// ```
/// use b64kit::{is_valid_base64, ConversionOptions};
///
/// let opts = ConversionOptions::decode();
/// assert!(is_valid_base64("SGVsbG8=", &opts));
/// assert!(!is_valid_base64("SGVsbG8!", &opts));
/// assert!(!is_valid_base64("SGVsbG9=", &opts));
/// ```
pub fn is_valid_base64(candidate: &str, opts: &ConversionOptions) -> bool {
    let normalized = normalize(candidate, opts, Mode::Decode);
    if !has_base64_shape(&normalized) {
        tracing::debug!(len = normalized.len(), "rejected: characters outside the alphabet");
        return false;
    }

    let bytes = match from_base64(&normalized) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(%err, "rejected: does not decode");
            return false;
        }
    };

    let reencoded = to_base64(&bytes);
    let accepted = matches!(
        reencoded.strip_prefix(normalized.as_str()),
        Some("" | "=" | "==")
    );
    if !accepted {
        tracing::debug!("rejected: re-encoding differs");
    }
    accepted
}

/// `[A-Za-z0-9+/]*` followed by at most two `=`.
fn has_base64_shape(s: &str) -> bool {
    let body = s.trim_end_matches(PAD);
    s.len() - body.len() <= 2 && body.bytes().all(is_alphabet_byte)
}
