//! b64kit-util - String helpers shared by the b64kit crates.

pub mod strings;

pub use strings::{is_whitespace, strip_whitespace, utf16_len, wrap_every, CharPredicate};
