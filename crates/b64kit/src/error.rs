use crate::decoder::DecodeError;
use crate::encoder::EncodeError;

/// Any failure of a single conversion.
///
/// [`convert`](crate::convert) folds these into an invalid
/// [`ConversionResult`](crate::ConversionResult); they never escape it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscodeError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
