//! Length limiting.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Unit used when truncating text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitMode {
    /// Keep the first N characters.
    #[default]
    Characters,
    /// Keep the first N whitespace-delimited words.
    Words,
    /// Keep the first N sentences.
    Sentences,
}

/// A sentence is a maximal run of non-terminator characters followed by a
/// run of `.`, `!`, or `?`.
static SENTENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

/// Truncates `text` to the first `limit` units. A limit of zero is a no-op.
///
/// Words are rejoined with single spaces. Kept sentence matches are
/// concatenated, so the spacing between them survives; trailing text with
/// no sentence terminator is dropped.
pub fn limit_text(text: &str, limit: usize, mode: LimitMode) -> Cow<'_, str> {
    if limit == 0 {
        return Cow::Borrowed(text);
    }

    match mode {
        LimitMode::Characters => match text.char_indices().nth(limit) {
            Some((idx, _)) => Cow::Borrowed(&text[..idx]),
            None => Cow::Borrowed(text),
        },
        LimitMode::Words => {
            let words: Vec<&str> = text.split_whitespace().take(limit).collect();
            Cow::Owned(words.join(" "))
        }
        LimitMode::Sentences => Cow::Owned(
            SENTENCE
                .find_iter(text)
                .take(limit)
                .map(|m| m.as_str())
                .collect(),
        ),
    }
}
