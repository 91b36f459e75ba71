//! Line re-flow.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Unit used when re-flowing lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    /// At most N characters per line.
    #[default]
    Characters,
    /// At most N words per line.
    Words,
}

/// Re-flows `text` into lines of at most `limit` characters or words.
/// A limit of zero is a no-op.
///
/// Existing line structure is discarded; words are whitespace-delimited.
/// In character mode the joining space counts toward the line length, and
/// a word longer than the limit is split into limit-sized slices, so no
/// emitted line ever exceeds the limit.
pub fn wrap_lines(text: &str, limit: usize, mode: WrapMode) -> Cow<'_, str> {
    if limit == 0 {
        return Cow::Borrowed(text);
    }

    match mode {
        WrapMode::Characters => Cow::Owned(wrap_by_characters(text, limit)),
        WrapMode::Words => Cow::Owned(wrap_by_words(text, limit)),
    }
}

fn wrap_by_characters(text: &str, limit: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let mut word = word;
        let mut word_len = word.chars().count();

        if line_len > 0 && line_len + 1 + word_len > limit {
            out.push('\n');
            line_len = 0;
        }

        // Words that cannot fit on any line are sliced at the limit.
        while word_len > limit {
            let split = word
                .char_indices()
                .nth(limit)
                .map(|(idx, _)| idx)
                .unwrap_or(word.len());
            out.push_str(&word[..split]);
            out.push('\n');
            word = &word[split..];
            word_len -= limit;
        }

        if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(word);
        line_len += word_len;
    }

    out
}

fn wrap_by_words(text: &str, limit: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut count = 0usize;

    for word in text.split_whitespace() {
        if count == limit {
            out.push('\n');
            count = 0;
        } else if count > 0 {
            out.push(' ');
        }
        out.push_str(word);
        count += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_fill_lines_up_to_limit() {
        assert_eq!(
            wrap_lines("ab cd efgh", 5, WrapMode::Characters),
            "ab cd\nefgh"
        );
    }

    #[test]
    fn joining_space_counts_toward_the_limit() {
        assert_eq!(wrap_lines("ab cde", 5, WrapMode::Characters), "ab\ncde");
    }

    #[test]
    fn overlong_word_is_split_repeatedly() {
        assert_eq!(
            wrap_lines("abcdefghijkl", 5, WrapMode::Characters),
            "abcde\nfghij\nkl"
        );
    }

    #[test]
    fn no_line_ever_exceeds_the_limit() {
        let out = wrap_lines("a verylongword with assorted lengths xx", 6, WrapMode::Characters);
        for line in out.lines() {
            assert!(line.chars().count() <= 6, "line too long: {:?}", line);
        }
    }

    #[test]
    fn words_per_line() {
        assert_eq!(
            wrap_lines("one two three four five", 2, WrapMode::Words),
            "one two\nthree four\nfive"
        );
    }

    #[test]
    fn reflow_discards_existing_newlines() {
        assert_eq!(
            wrap_lines("a\nb\nc", 2, WrapMode::Words),
            "a b\nc"
        );
    }

    #[test]
    fn zero_limit_is_noop() {
        assert_eq!(wrap_lines("anything at all", 0, WrapMode::Characters), "anything at all");
    }
}
