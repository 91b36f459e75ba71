//! Sentence-initial capitalization.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SENTENCE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|\.\s+)([a-z])").unwrap());

/// Upper-cases the first letter of the text and the first letter following
/// each period-plus-whitespace sequence.
///
/// Only ASCII lowercase letters are promoted; a string with no lowercase
/// letters comes back unchanged.
pub fn capitalize(text: &str) -> Cow<'_, str> {
    SENTENCE_START.replace_all(text, |caps: &Captures<'_>| {
        format!("{}{}", &caps[1], caps[2].to_ascii_uppercase())
    })
}
