//! Input debouncing.
//!
//! Coalesces bursts of input into at most one conversion per quiet period.
//! This only decides *when* to convert; conversion output is the same whether
//! it runs per keystroke or per quiet period. Time is passed in by the caller.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Records `input` as the latest value, restarting the quiet period.
    pub fn push(&mut self, input: impl Into<String>, now: Instant) {
        self.pending = Some((input.into(), now));
    }

    /// Yields the latest input once the quiet period has passed since the
    /// last [`push`](Self::push). Yields each pushed value at most once.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let ready = match &self.pending {
            Some((_, at)) => now.saturating_duration_since(*at) >= self.quiet,
            None => false,
        };
        if ready {
            self.pending.take().map(|(input, _)| input)
        } else {
            None
        }
    }

    /// Yields any pending input immediately.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(input, _)| input)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
