//! Tests for base64 decoding (from_base64).

use b64kit_base64::{from_base64, to_base64, Base64Error};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn decodes_reference_encodings() {
    for _ in 0..200 {
        let blob = generate_blob();
        let encoded = STANDARD.encode(&blob);
        assert_eq!(from_base64(&encoded).unwrap(), blob);
    }
}

#[test]
fn decodes_without_padding() {
    for _ in 0..200 {
        let blob = generate_blob();
        let encoded = to_base64(&blob);
        let unpadded = encoded.trim_end_matches('=');
        assert_eq!(from_base64(unpadded).unwrap(), blob);
    }
}

#[test]
fn handles_invalid_values() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base64(&blob);
        let invalid = format!("{}!!!!", encoded);
        assert!(from_base64(&invalid).is_err());
    }
}

#[test]
fn reports_offset_of_bad_character() {
    let err = from_base64("SGVs\nbG8").unwrap_err();
    assert_eq!(err, Base64Error::InvalidByte { offset: 4, byte: b'\n' });
    assert_eq!(err.to_string(), "invalid base64 byte 0x0a at offset 4");
}

#[test]
fn rejects_non_ascii() {
    assert!(matches!(
        from_base64("SGVsbGé"),
        Err(Base64Error::InvalidByte { offset: 6, .. })
    ));
}

#[test]
fn empty_input() {
    assert_eq!(from_base64("").unwrap(), b"");
}

#[test]
fn hello_world() {
    assert_eq!(from_base64("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
}
