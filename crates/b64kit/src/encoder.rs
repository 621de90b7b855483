//! Text to Base64.

use b64kit_base64::{encode_into, encoded_len, PAD};
use b64kit_util::strings::wrap_every;

use crate::normalize::to_url_safe_alphabet;
use crate::options::ConversionOptions;

/// Separator inserted by line wrapping.
pub const LINE_BREAK: &str = "\n";

/// Failure while encoding. Only reachable for inputs too large to address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("input of {0} bytes is too large to encode")]
    OutputTooLarge(usize),
}

/// Encodes `text` as Base64 under `opts`.
///
/// The UTF-8 bytes of `text` are encoded with the standard alphabet, then
/// padding is dropped if `add_padding` is off, `+`/`/` become `-`/`_` if
/// `url_safe` is on, and a line break goes after every `line_break_every`
/// characters if `add_line_breaks` is on.
///
/// # Example
///
/// ```
/// use b64kit::{encode, ConversionOptions};
///
/// assert_eq!(encode("Hello", &ConversionOptions::default()).unwrap(), "SGVsbG8=");
/// ```
pub fn encode(text: &str, opts: &ConversionOptions) -> Result<String, EncodeError> {
    let bytes = text.as_bytes();
    let capacity = encoded_len(bytes.len()).ok_or(EncodeError::OutputTooLarge(bytes.len()))?;

    let mut out = String::with_capacity(capacity);
    encode_into(bytes, &mut out);

    if !opts.add_padding {
        let unpadded = out.trim_end_matches(PAD).len();
        out.truncate(unpadded);
    }
    if opts.url_safe {
        out = to_url_safe_alphabet(&out);
    }
    if opts.add_line_breaks {
        out = wrap_every(&out, opts.line_break_every(), LINE_BREAK);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_padded() {
        let opts = ConversionOptions::default();
        assert_eq!(encode("Hello", &opts).unwrap(), "SGVsbG8=");
        assert_eq!(encode("", &opts).unwrap(), "");
    }

    #[test]
    fn url_safe_without_padding() {
        let opts = ConversionOptions::default().with_url_safe(true).with_padding(false);
        assert_eq!(encode("Hello", &opts).unwrap(), "SGVsbG8");
        assert_eq!(encode("<<??>>", &opts).unwrap(), "PDw_Pz4-");
        assert_eq!(encode("\u{ffff}", &opts).unwrap(), "77-_");
    }

    #[test]
    fn url_safe_keeps_padding_when_asked() {
        let opts = ConversionOptions::default().with_url_safe(true);
        assert_eq!(encode("Hello", &opts).unwrap(), "SGVsbG8=");
    }

    #[test]
    fn encodes_utf8_bytes() {
        let opts = ConversionOptions::default();
        assert_eq!(encode("Hello, 世界!", &opts).unwrap(), "SGVsbG8sIOS4lueVjCE=");
        assert_eq!(encode("é", &opts).unwrap(), "w6k=");
    }

    #[test]
    fn wraps_lines() {
        let opts = ConversionOptions::default().with_line_breaks(4);
        assert_eq!(encode("Hello, world", &opts).unwrap(), "SGVs\nbG8s\nIHdv\ncmxk");
        assert_eq!(encode("Hello", &opts).unwrap(), "SGVs\nbG8=");
    }

    #[test]
    fn wrap_ignored_unless_enabled() {
        let mut opts = ConversionOptions::default();
        opts.set_line_break_every(2);
        assert_eq!(encode("Hello", &opts).unwrap(), "SGVsbG8=");
    }

    #[test]
    fn default_wrap_is_76() {
        let opts = ConversionOptions::default().with_line_breaks(0);
        let text = "x".repeat(120);
        let encoded = encode(&text, &opts).unwrap();
        let lines: Vec<&str> = encoded.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 76);
        assert_eq!(lines[1].len(), 76);
        assert_eq!(lines[2].len(), 8);
    }
}
