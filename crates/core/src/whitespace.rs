//! Whitespace normalization primitives.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Removes leading and trailing whitespace.
pub fn trim(text: &str) -> &str {
    text.trim()
}

/// Collapses newlines while preserving paragraph breaks.
///
/// A newline not adjacent to another newline becomes a single space; runs
/// of two or more newlines collapse to exactly two.
pub fn collapse_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\n') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\n' {
            out.push(c);
            continue;
        }
        let mut run = 1usize;
        while chars.peek() == Some(&'\n') {
            chars.next();
            run += 1;
        }
        if run == 1 {
            out.push(' ');
        } else {
            out.push_str("\n\n");
        }
    }
    Cow::Owned(out)
}

/// Replaces every whitespace run with a single space.
pub fn collapse_spaces(text: &str) -> Cow<'_, str> {
    WHITESPACE_RUN.replace_all(text, " ")
}
