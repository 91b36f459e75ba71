//! ASCII filtering.

use std::borrow::Cow;

/// Removes every character outside the 7-bit ASCII range.
pub fn strip_non_ascii(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(char::is_ascii).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_accented_characters() {
        assert_eq!(strip_non_ascii("café"), "caf");
    }

    #[test]
    fn drops_emoji_and_cjk() {
        assert_eq!(strip_non_ascii("ok 🚀 完了 done"), "ok   done");
    }

    #[test]
    fn ascii_input_borrows() {
        assert!(matches!(strip_non_ascii("plain text\n"), Cow::Borrowed(_)));
    }

    #[test]
    fn control_characters_survive() {
        assert_eq!(strip_non_ascii("a\tb\nc"), "a\tb\nc");
    }
}
