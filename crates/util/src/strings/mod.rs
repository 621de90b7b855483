//! String utilities.
//!
//! Provides fixed-width wrapping, whitespace handling and length helpers.

mod util;
mod wrap;

pub use util::{is_whitespace, strip_whitespace, utf16_len, CharPredicate};
pub use wrap::wrap_every;
