/// A predicate function for checking character properties.
pub type CharPredicate = fn(char) -> bool;

/// Check if a character is whitespace.
///
/// Covers Unicode `White_Space` plus the byte order mark (U+FEFF), which
/// pasted text frequently carries.
///
/// # Examples
///
/// ```
/// use b64kit_util::strings::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\t'));
/// assert!(is_whitespace('\u{feff}'));
/// assert!(!is_whitespace('a'));
/// ```
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{feff}'
}

/// Removes every whitespace character (see [`is_whitespace`]) from `s`.
///
/// # Examples
///
/// ```
/// use b64kit_util::strings::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" SGVs\r\nbG8=\t"), "SGVsbG8=");
/// ```
pub fn strip_whitespace(s: &str) -> String {
    let predicate: CharPredicate = is_whitespace;
    s.chars().filter(|&ch| !predicate(ch)).collect()
}

/// Length of `s` in UTF-16 code units.
///
/// # Examples
///
/// ```
/// use b64kit_util::strings::utf16_len;
///
/// assert_eq!(utf16_len("abc"), 3);
/// assert_eq!(utf16_len("世界"), 2);
/// assert_eq!(utf16_len("😀"), 2);
/// ```
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}
