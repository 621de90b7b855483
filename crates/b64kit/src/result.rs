use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use b64kit_util::strings::utf16_len;

use crate::options::Mode;

/// Outcome of one conversion. Built once, never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub original_text: String,
    /// Empty when `is_valid` is false.
    pub converted_text: String,
    pub mode: Mode,
    /// UTF-16 code units in `original_text`.
    pub char_count: usize,
    /// UTF-8 bytes in `original_text`.
    pub byte_count: usize,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ConversionResult {
    pub fn success(original: &str, converted: String, mode: Mode) -> Self {
        Self::new(original, converted, mode, None)
    }

    pub fn failure(original: &str, mode: Mode, message: impl Into<String>) -> Self {
        Self::new(original, String::new(), mode, Some(message.into()))
    }

    fn new(original: &str, converted: String, mode: Mode, error_message: Option<String>) -> Self {
        Self {
            original_text: original.to_string(),
            converted_text: converted,
            mode,
            char_count: utf16_len(original),
            byte_count: original.len(),
            is_valid: error_message.is_none(),
            error_message,
            timestamp: Utc::now(),
        }
    }

    /// The `(original_text, mode)` pair history entries are keyed on.
    pub fn key(&self) -> (&str, Mode) {
        (&self.original_text, self.mode)
    }
}
