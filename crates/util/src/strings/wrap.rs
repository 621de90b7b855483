/// Breaks `s` into chunks of `width` characters joined by `separator`.
///
/// Chunking is greedy from the left; the last chunk may be shorter. No
/// separator is added after the final chunk. A `width` of zero, or a string
/// no longer than `width`, is returned unchanged.
///
/// Widths count `char`s, not bytes, so multi-byte text is never split inside
/// a character.
///
/// # Examples
///
/// ```
/// use b64kit_util::strings::wrap_every;
///
/// assert_eq!(wrap_every("abcdefg", 3, "\n"), "abc\ndef\ng");
/// assert_eq!(wrap_every("abc", 3, "\n"), "abc");
/// ```
pub fn wrap_every(s: &str, width: usize, separator: &str) -> String {
    if width == 0 {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + (s.len() / width) * separator.len());
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && i % width == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_every("", 4, "\n"), "");
    }

    #[test]
    fn test_wrap_exact_multiple() {
        assert_eq!(wrap_every("abcdef", 3, "\n"), "abc\ndef");
    }

    #[test]
    fn test_wrap_short_tail() {
        assert_eq!(wrap_every("abcdefgh", 3, "\r\n"), "abc\r\ndef\r\ngh");
    }

    #[test]
    fn test_wrap_width_one() {
        assert_eq!(wrap_every("abc", 1, "-"), "a-b-c");
    }

    #[test]
    fn test_wrap_zero_width_is_noop() {
        assert_eq!(wrap_every("abcdef", 0, "\n"), "abcdef");
    }

    #[test]
    fn test_wrap_counts_chars() {
        assert_eq!(wrap_every("世界世界", 2, "\n"), "世界\n世界");
    }

    proptest! {
        #[test]
        fn prop_removing_separator_restores_input(s in "[A-Za-z0-9+/=]{0,300}", width in 1usize..100) {
            let wrapped = wrap_every(&s, width, "\n");
            prop_assert_eq!(wrapped.replace('\n', ""), s.clone());
            for line in wrapped.split('\n') {
                prop_assert!(line.chars().count() <= width);
            }
        }
    }
}
