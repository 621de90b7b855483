//! Bounded, deduplicated conversion history.

use std::collections::VecDeque;

use crate::options::Mode;
use crate::result::ConversionResult;

/// Maximum number of entries kept.
pub const HISTORY_CAPACITY: usize = 10;

/// Most-recent-first list of successful conversions.
///
/// At most [`HISTORY_CAPACITY`] entries, and no two with the same
/// `(original_text, mode)`. Re-recording a key moves it to the front.
#[derive(Debug, Clone, Default)]
pub struct ConversionHistory {
    entries: VecDeque<ConversionResult>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `result` at the front. Invalid results are ignored and
    /// `false` is returned.
    pub fn record(&mut self, result: ConversionResult) -> bool {
        if !result.is_valid {
            return false;
        }
        self.entries.retain(|entry| entry.key() != result.key());
        self.entries.push_front(result);
        self.entries.truncate(HISTORY_CAPACITY);
        true
    }

    pub fn get(&self, index: usize) -> Option<&ConversionResult> {
        self.entries.get(index)
    }

    /// Finds the entry for `(original_text, mode)`.
    pub fn find(&self, original_text: &str, mode: Mode) -> Option<&ConversionResult> {
        self.entries
            .iter()
            .find(|entry| entry.key() == (original_text, mode))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversionResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a ConversionHistory {
    type Item = &'a ConversionResult;
    type IntoIter = std::collections::vec_deque::Iter<'a, ConversionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
