//! b64kit - configurable text ⇄ Base64 transcoding.
//!
//! A conversion runs through a fixed pipeline, every stage taking the same
//! [`ConversionOptions`] by reference:
//!
//! 1. [`normalize`]: whitespace stripping, URL-safe to standard alphabet,
//!    padding restoration (decode only).
//! 2. [`is_valid_base64`]: decode→re-encode round trip (decode only, when
//!    `validate_input` is set).
//! 3. [`encode`] / [`decode`]: UTF-8 text to standard Base64 and back, with
//!    padding, alphabet and line-wrap options applied on the way out.
//! 4. [`decorate`]: prefix and suffix on successful output.
//!
//! [`convert`] ties these together and never fails; [`Session`] adds the last
//! result and a bounded [`ConversionHistory`].
//!
//! # Example
//!
//! ```
//! use b64kit::{ConversionOptions, Mode, Session};
//!
//! let mut session = Session::new(ConversionOptions::default());
//! assert_eq!(session.convert("Hello, 世界!").converted_text, "SGVsbG8sIOS4lueVjCE=");
//!
//! session.set_options(ConversionOptions::default().with_mode(Mode::Decode));
//! assert_eq!(session.convert("SGVsbG8sIOS4lueVjCE=").converted_text, "Hello, 世界!");
//! assert_eq!(session.history().len(), 2);
//! ```

pub mod config;
pub mod convert;
pub mod debounce;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod history;
pub mod normalize;
pub mod options;
pub mod result;
pub mod session;
pub mod validator;

pub use config::{Config, ConfigError, DEFAULT_DEBOUNCE_MS};
pub use convert::{convert, transcode};
pub use debounce::Debouncer;
pub use decoder::{decode, DecodeError};
pub use encoder::{encode, EncodeError, LINE_BREAK};
pub use error::TranscodeError;
pub use format::{decorate, format_result};
pub use history::{ConversionHistory, HISTORY_CAPACITY};
pub use normalize::normalize;
pub use options::{coerce_line_width, ConversionOptions, Mode, DEFAULT_LINE_WIDTH};
pub use result::ConversionResult;
pub use session::Session;
pub use validator::is_valid_base64;
