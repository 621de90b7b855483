//! End-to-end conversion scenarios.

use b64kit::{
    convert, decode, encode, is_valid_base64, ConversionOptions, Mode, Session, HISTORY_CAPACITY,
};

#[test]
fn encode_hello_padded() {
    let opts = ConversionOptions::encode().with_url_safe(false).with_padding(true);
    assert_eq!(encode("Hello", &opts).unwrap(), "SGVsbG8=");
}

#[test]
fn encode_hello_url_safe_unpadded() {
    let opts = ConversionOptions::encode().with_url_safe(true).with_padding(false);
    assert_eq!(encode("Hello", &opts).unwrap(), "SGVsbG8");
}

#[test]
fn decode_hello_defaults() {
    assert_eq!(decode("SGVsbG8=", &ConversionOptions::default()).unwrap(), "Hello");
}

#[test]
fn validator_rejects_bang() {
    let opts = ConversionOptions::decode().with_strip_whitespace(true);
    assert!(!is_valid_base64("SGVsbG8!", &opts));
}

#[test]
fn multi_byte_round_trip() {
    let opts = ConversionOptions::default();
    let encoded = encode("Hello, 世界!", &opts).unwrap();
    assert_eq!(decode(&encoded, &opts).unwrap(), "Hello, 世界!");
}

#[test]
fn repeated_input_keeps_one_history_entry() {
    let mut session = Session::new(ConversionOptions::encode());
    session.convert("other");
    session.convert("abc");
    session.convert("abc");
    let matching: Vec<_> = session
        .history()
        .iter()
        .filter(|entry| entry.original_text == "abc")
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(session.history().get(0).unwrap().original_text, "abc");
    assert_eq!(session.history().len(), 2);
}

#[test]
fn empty_input_both_ways() {
    let encoded = convert("", &ConversionOptions::encode());
    assert!(encoded.is_valid);
    assert_eq!(encoded.converted_text, "");

    let decoded = convert("", &ConversionOptions::decode());
    assert!(decoded.is_valid);
    assert_eq!(decoded.converted_text, "");
}

#[test]
fn invalid_decode_reports_message_and_counts() {
    let result = convert("SGVsbG8!", &ConversionOptions::decode().with_prefix(">>"));
    assert!(!result.is_valid);
    assert_eq!(result.converted_text, "");
    assert_eq!(result.error_message.as_deref(), Some("Input is not valid Base64"));
    assert_eq!(result.char_count, 8);
    assert_eq!(result.byte_count, 8);

    let result = convert("SGVsbG8!", &ConversionOptions::decode().with_validation(false));
    assert_eq!(
        result.error_message.as_deref(),
        Some("Invalid Base64 input - cannot decode")
    );
}

#[test]
fn wrapped_url_safe_output_decodes_back() {
    let text = "The quick brown fox jumps over the lazy dog? ~~~ >>> ???".repeat(4);
    let opts = ConversionOptions::encode()
        .with_url_safe(true)
        .with_padding(false)
        .with_line_breaks(20);
    let encoded = encode(&text, &opts).unwrap();
    assert!(encoded.lines().all(|line| line.len() <= 20));
    assert!(!encoded.contains('+') && !encoded.contains('/') && !encoded.contains('='));

    let result = convert(&encoded, &opts.clone().with_mode(Mode::Decode));
    assert!(result.is_valid, "{:?}", result.error_message);
    assert_eq!(result.converted_text, text);
}

#[test]
fn history_never_exceeds_capacity() {
    let mut session = Session::new(ConversionOptions::encode());
    for i in 0..(HISTORY_CAPACITY * 3) {
        session.convert(&format!("input {i}"));
        assert!(session.history().len() <= HISTORY_CAPACITY);
    }
    assert_eq!(session.history().len(), HISTORY_CAPACITY);
}

#[test]
fn swap_round_trips_through_session() {
    let mut session = Session::new(ConversionOptions::encode().with_line_breaks(4));
    session.convert("Hello, 世界!");
    let back = session.swap().unwrap();
    assert!(back.is_valid);
    assert_eq!(back.converted_text, "Hello, 世界!");
    assert_eq!(session.history().len(), 2);
}
