//! Single-character occurrence counting.

/// Count how many characters of `text` equal the single character in `token`.
///
/// This is a per-position character counter, not a substring search: if
/// `token` is empty or longer than one character the count is 0, even when
/// `text` contains `token` as a substring.
///
/// # Examples
///
/// ```
/// use timetag::count_char;
///
/// assert_eq!(count_char("2021-03-03", "-"), 2);
/// assert_eq!(count_char("2021-W01", "-W"), 0);
/// ```
pub fn count_char(text: &str, token: &str) -> usize {
    let mut chars = token.chars();
    let (Some(needle), None) = (chars.next(), chars.next()) else {
        return 0;
    };
    text.chars().filter(|&c| c == needle).count()
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_count_hyphens() {
        assert_eq!(count_char("2021-03-03", "-"), 2);
        assert_eq!(count_char("2021-03", "-"), 1);
        assert_eq!(count_char("14:30", "-"), 0);
    }

    #[test]
    fn test_count_empty_text() {
        assert_eq!(count_char("", "-"), 0);
    }

    #[test]
    fn test_count_empty_token_is_zero() {
        assert_eq!(count_char("anything", ""), 0);
    }

    #[test]
    fn test_count_multichar_token_is_zero() {
        // Present as a substring, but this is a character counter.
        assert_eq!(count_char("2021-W01", "-W"), 0);
        assert_eq!(count_char("abcabc", "abc"), 0);
    }

    #[test]
    fn test_count_non_ascii() {
        assert_eq!(count_char("héllo héll", "é"), 2);
    }

    proptest! {
        #[test]
        fn prop_count_matches_filter(text in ".*", needle in proptest::char::any()) {
            let token = needle.to_string();
            let expected = text.chars().filter(|&c| c == needle).count();
            prop_assert_eq!(count_char(&text, &token), expected);
        }
    }
}
