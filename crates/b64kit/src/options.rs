//! Conversion options.
//!
//! [`ConversionOptions`] is an immutable value handed by reference to every
//! stage of a conversion (normalizer, validator, encoder/decoder, formatter).

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

/// Line width used when none (or an unusable one) is given. The MIME limit.
pub const DEFAULT_LINE_WIDTH: usize = 76;

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Text to Base64.
    #[default]
    Encode,
    /// Base64 to text.
    Decode,
}

impl Mode {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Mode::Encode => Mode::Decode,
            Mode::Decode => Mode::Encode,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Encode => write!(f, "encode"),
            Mode::Decode => write!(f, "decode"),
        }
    }
}

/// The full option set for one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionOptions {
    pub mode: Mode,
    /// Use `-`/`_` in place of `+`/`/`.
    pub url_safe: bool,
    /// Emit trailing `=` on encode; restore it on decode.
    pub add_padding: bool,
    pub add_line_breaks: bool,
    #[serde(deserialize_with = "deserialize_line_width")]
    line_break_every: usize,
    /// Remove all whitespace from decode input.
    pub strip_whitespace: bool,
    /// Run the round-trip validator before decoding.
    pub validate_input: bool,
    pub add_prefix: String,
    pub add_suffix: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Encode,
            url_safe: false,
            add_padding: true,
            add_line_breaks: false,
            line_break_every: DEFAULT_LINE_WIDTH,
            strip_whitespace: true,
            validate_input: true,
            add_prefix: String::new(),
            add_suffix: String::new(),
        }
    }
}

impl ConversionOptions {
    /// Defaults in [`Mode::Encode`].
    pub fn encode() -> Self {
        Self::default()
    }

    /// Defaults in [`Mode::Decode`].
    pub fn decode() -> Self {
        Self::default().with_mode(Mode::Decode)
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_url_safe(mut self, url_safe: bool) -> Self {
        self.url_safe = url_safe;
        self
    }

    pub fn with_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }

    /// Enables line breaks every `width` characters. `width` is coerced like
    /// any other user supplied width, so `0` or a negative value means 76.
    pub fn with_line_breaks(mut self, width: i64) -> Self {
        self.add_line_breaks = true;
        self.line_break_every = coerce_line_width_value(width);
        self
    }

    pub fn with_strip_whitespace(mut self, strip: bool) -> Self {
        self.strip_whitespace = strip;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_input = validate;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.add_prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.add_suffix = suffix.into();
        self
    }

    /// Line width for wrapping. Always at least 1.
    pub fn line_break_every(&self) -> usize {
        self.line_break_every
    }

    /// Sets the wrap width from a raw integer, coercing non-positive values.
    pub fn set_line_break_every(&mut self, width: i64) {
        self.line_break_every = coerce_line_width_value(width);
    }
}

/// Coerces a numeric width: anything below 1 becomes [`DEFAULT_LINE_WIDTH`].
pub fn coerce_line_width_value(width: i64) -> usize {
    if width < 1 {
        tracing::warn!(width, "line width must be positive, using {}", DEFAULT_LINE_WIDTH);
        return DEFAULT_LINE_WIDTH;
    }
    usize::try_from(width).unwrap_or(DEFAULT_LINE_WIDTH)
}

/// Coerces a user supplied width string.
///
/// Surrounding whitespace is ignored and the leading base-10 integer is used,
/// so `"64"`, `" 64 "`, `"64px"` and `"64.9"` all give 64. No leading digits,
/// or a value below 1, gives [`DEFAULT_LINE_WIDTH`].
///
/// # Example
///
/// ```
/// use b64kit::coerce_line_width;
///
/// assert_eq!(coerce_line_width("64"), 64);
/// assert_eq!(coerce_line_width("0"), 76);
/// assert_eq!(coerce_line_width("wide"), 76);
/// ```
pub fn coerce_line_width(raw: &str) -> usize {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(value) if negative => coerce_line_width_value(-value),
        Ok(value) => coerce_line_width_value(value),
        Err(_) if end > 0 => {
            // Digits only, so the parse failed on overflow.
            tracing::warn!(raw, "line width out of range, using {}", DEFAULT_LINE_WIDTH);
            DEFAULT_LINE_WIDTH
        }
        Err(_) => {
            tracing::warn!(raw, "line width is not a number, using {}", DEFAULT_LINE_WIDTH);
            DEFAULT_LINE_WIDTH
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWidth {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

fn deserialize_line_width<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawWidth::deserialize(deserializer)? {
        RawWidth::Int(value) => coerce_line_width_value(value),
        RawWidth::Float(value) if value.is_finite() => coerce_line_width_value(value.trunc() as i64),
        RawWidth::Float(_) | RawWidth::Other(_) => DEFAULT_LINE_WIDTH,
        RawWidth::Text(text) => coerce_line_width(&text),
    })
}
