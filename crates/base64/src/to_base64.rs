//! Standard base64 encoding.

use crate::constants::{ALPHABET_BYTES, PAD};

/// Pre-computed two-character lookup table for base64 encoding.
/// Entry `i` holds the characters for the 12-bit value `i`.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Length of the padded encoding of `len` input bytes, or `None` if it
/// does not fit in `usize`.
///
/// # Example
///
/// ```
/// use b64kit_base64::encoded_len;
///
/// assert_eq!(encoded_len(0), Some(0));
/// assert_eq!(encoded_len(5), Some(8));
/// assert_eq!(encoded_len(usize::MAX), None);
/// ```
pub fn encoded_len(len: usize) -> Option<usize> {
    len.div_ceil(3).checked_mul(4)
}

/// Encodes a byte slice to a standard, padded base64 string.
///
/// # Example
///
/// ```
/// use b64kit_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()).unwrap_or_default());
    encode_into(bytes, &mut out);
    out
}

/// Appends the padded base64 encoding of `bytes` to `out`.
pub fn encode_into(bytes: &[u8], out: &mut String) {
    let mut chunks = bytes.chunks_exact(3);
    for chunk in chunks.by_ref() {
        let v1 = ((chunk[0] as usize) << 4) | ((chunk[1] as usize) >> 4);
        let v2 = (((chunk[1] & 0b1111) as usize) << 8) | (chunk[2] as usize);
        push_pair(out, v1);
        push_pair(out, v2);
    }

    match *chunks.remainder() {
        [o1] => {
            push_pair(out, (o1 as usize) << 4);
            out.push(PAD);
            out.push(PAD);
        }
        [o1, o2] => {
            push_pair(out, ((o1 as usize) << 4) | ((o2 as usize) >> 4));
            out.push(ALPHABET_BYTES[((o2 & 0b1111) as usize) << 2] as char);
            out.push(PAD);
        }
        _ => {}
    }
}

#[inline]
fn push_pair(out: &mut String, v: usize) {
    out.push(TABLE2[v][0] as char);
    out.push(TABLE2[v][1] as char);
}
