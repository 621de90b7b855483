//! The single entry point collaborators call.

use crate::decoder::{decode, DecodeError};
use crate::encoder::encode;
use crate::error::TranscodeError;
use crate::format::format_result;
use crate::options::{ConversionOptions, Mode};
use crate::result::ConversionResult;
use crate::validator::is_valid_base64;

/// Runs the encoder or the (optionally validated) decoder, without
/// prefix/suffix decoration.
pub fn transcode(input: &str, opts: &ConversionOptions) -> Result<String, TranscodeError> {
    match opts.mode {
        Mode::Encode => Ok(encode(input, opts)?),
        Mode::Decode => {
            if opts.validate_input && !is_valid_base64(input, opts) {
                return Err(DecodeError::Rejected.into());
            }
            Ok(decode(input, opts)?)
        }
    }
}

/// Converts `input` under `opts`. Never fails: errors become an invalid
/// [`ConversionResult`] with `error_message` set.
///
/// # Example
///
/// ```
/// use b64kit::{convert, ConversionOptions};
///
/// let result = convert("Hello", &ConversionOptions::encode());
/// assert!(result.is_valid);
/// assert_eq!(result.converted_text, "SGVsbG8=");
///
/// let result = convert("SGVsbG8!", &ConversionOptions::decode());
/// assert!(!result.is_valid);
/// assert_eq!(result.error_message.as_deref(), Some("Input is not valid Base64"));
/// ```
pub fn convert(input: &str, opts: &ConversionOptions) -> ConversionResult {
    let outcome = transcode(input, opts);
    let result = format_result(input, opts, &outcome);
    tracing::debug!(
        mode = %opts.mode,
        input_len = input.len(),
        output_len = result.converted_text.len(),
        valid = result.is_valid,
        "conversion finished"
    );
    result
}
