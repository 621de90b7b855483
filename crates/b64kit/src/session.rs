//! Conversion session state: active options, last result, history.

use crate::config::Config;
use crate::convert::transcode;
use crate::format::format_result;
use crate::history::ConversionHistory;
use crate::options::ConversionOptions;
use crate::result::ConversionResult;

/// One user's conversion session.
///
/// Single writer: each conversion completes before the next starts.
#[derive(Debug, Clone, Default)]
pub struct Session {
    options: ConversionOptions,
    last: Option<ConversionResult>,
    /// Undecorated output of `last`, fed back by [`Session::swap`].
    last_output: Option<String>,
    history: ConversionHistory,
}

impl Session {
    pub fn new(options: ConversionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.options.clone())
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ConversionOptions) {
        self.options = options;
    }

    /// Converts `input` with the session options, remembers the result and
    /// records it in the history if it is valid.
    pub fn convert(&mut self, input: &str) -> &ConversionResult {
        let outcome = transcode(input, &self.options);
        let result = format_result(input, &self.options, &outcome);
        tracing::debug!(mode = %result.mode, valid = result.is_valid, "session conversion");

        if self.history.record(result.clone()) {
            tracing::trace!(entries = self.history.len(), "history updated");
        }
        self.last_output = outcome.ok();
        self.last.insert(result)
    }

    pub fn last_result(&self) -> Option<&ConversionResult> {
        self.last.as_ref()
    }

    pub fn history(&self) -> &ConversionHistory {
        &self.history
    }

    /// Uses the last output as new input in the opposite mode.
    ///
    /// Returns `None`, changing nothing, unless the last result is valid.
    pub fn swap(&mut self) -> Option<&ConversionResult> {
        let output = match (&self.last, &self.last_output) {
            (Some(last), Some(output)) if last.is_valid => output.clone(),
            _ => return None,
        };
        self.options.mode = self.options.mode.flipped();
        tracing::debug!(mode = %self.options.mode, "swapped input and output");
        Some(self.convert(&output))
    }

    /// Re-runs history entry `index` in its recorded mode, which becomes the
    /// session mode. The entry moves to the front.
    pub fn restore(&mut self, index: usize) -> Option<ConversionResult> {
        let entry = self.history.get(index)?;
        let (input, mode) = (entry.original_text.clone(), entry.mode);
        self.options.mode = mode;
        Some(self.convert(&input).clone())
    }

    /// Serializes the history, newest first, as a JSON array.
    pub fn history_json(&self) -> serde_json::Result<String> {
        let entries: Vec<&ConversionResult> = self.history.iter().collect();
        serde_json::to_string_pretty(&entries)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Drops the last result and the history. Options are kept.
    pub fn reset(&mut self) {
        tracing::info!(entries = self.history.len(), "session reset");
        self.last = None;
        self.last_output = None;
        self.history.clear();
    }
}
