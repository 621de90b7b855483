//! Final decoration of conversion output.

use crate::error::TranscodeError;
use crate::options::ConversionOptions;
use crate::result::ConversionResult;

/// Attaches `add_prefix` and `add_suffix` to successful output.
pub fn decorate(converted: &str, opts: &ConversionOptions) -> String {
    let mut out =
        String::with_capacity(opts.add_prefix.len() + converted.len() + opts.add_suffix.len());
    out.push_str(&opts.add_prefix);
    out.push_str(converted);
    out.push_str(&opts.add_suffix);
    out
}

/// Builds the [`ConversionResult`] for `input` from a transcoding outcome.
///
/// Only a successful outcome is decorated; a failure keeps empty output and
/// carries the error's message.
pub fn format_result(
    input: &str,
    opts: &ConversionOptions,
    outcome: &Result<String, TranscodeError>,
) -> ConversionResult {
    match outcome {
        Ok(converted) => ConversionResult::success(input, decorate(converted, opts), opts.mode),
        Err(err) => ConversionResult::failure(input, opts.mode, err.to_string()),
    }
}
