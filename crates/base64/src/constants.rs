/// Standard base64 alphabet (RFC 4648 §4).
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

pub(crate) const PAD_BYTE: u8 = b'=';

/// Marker for bytes outside the alphabet in [`DECODE_TABLE`].
pub(crate) const INVALID: u8 = 0xff;

/// Reverse lookup from an input byte to its sextet value.
pub(crate) static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns `true` if `byte` belongs to the standard alphabet (padding excluded).
pub fn is_alphabet_byte(byte: u8) -> bool {
    DECODE_TABLE[byte as usize] != INVALID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_alphabet() {
        for (i, &c) in ALPHABET_BYTES.iter().enumerate() {
            assert_eq!(DECODE_TABLE[c as usize], i as u8);
        }
    }

    #[test]
    fn rejects_url_safe_and_padding() {
        assert!(!is_alphabet_byte(b'-'));
        assert!(!is_alphabet_byte(b'_'));
        assert!(!is_alphabet_byte(b'='));
        assert!(is_alphabet_byte(b'+'));
        assert!(is_alphabet_byte(b'/'));
    }
}
