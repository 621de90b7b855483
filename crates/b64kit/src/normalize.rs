//! Canonicalizes Base64 text before validation and decoding.

use b64kit_util::strings::strip_whitespace;

use crate::options::{ConversionOptions, Mode};

/// Applies the whitespace, alphabet and padding options to `input`.
///
/// - `strip_whitespace` removes every whitespace character in either direction.
/// - `url_safe` maps `-`/`_` back to `+`/`/` when decoding. Encoding maps the
///   other way after the bytes are encoded, so nothing happens here.
/// - `add_padding` appends one or two `=` when decoding so the length is a
///   multiple of four. Input that would need three is left alone.
///
/// Never fails. Options that do not apply to `direction` are no-ops.
///
/// # Example
///
/// ```
/// use b64kit::{normalize, ConversionOptions, Mode};
///
/// let opts = ConversionOptions::decode().with_url_safe(true);
/// assert_eq!(normalize(" SGV-_w\n", &opts, Mode::Decode), "SGV+/w==");
/// ```
pub fn normalize(input: &str, opts: &ConversionOptions, direction: Mode) -> String {
    let mut out = if opts.strip_whitespace {
        strip_whitespace(input)
    } else {
        input.to_string()
    };

    if direction == Mode::Decode {
        if opts.url_safe {
            out = to_standard_alphabet(&out);
        }
        if opts.add_padding {
            pad_to_quantum(&mut out);
        }
    }

    tracing::trace!(%direction, before = input.len(), after = out.len(), "normalized input");
    out
}

/// Maps the URL-safe characters onto the standard alphabet.
pub(crate) fn to_standard_alphabet(s: &str) -> String {
    s.chars()
        .map(|ch| match ch {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect()
}

/// Maps `+`/`/` onto the URL-safe alphabet.
pub(crate) fn to_url_safe_alphabet(s: &str) -> String {
    s.chars()
        .map(|ch| match ch {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// Pads `s` with `=` to a multiple of four, adding at most two characters.
fn pad_to_quantum(s: &mut String) {
    match s.len() % 4 {
        2 => s.push_str("=="),
        3 => s.push('='),
        _ => {}
    }
}
