//! Indentation normalization.
//!
//! Rebuilds the leading whitespace of a line sequence from a running
//! nesting level, driven by list markers and reset by headings. Fenced
//! code blocks pass through untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::fence::FenceTracker;

/// Controls how [`fix_indentation`] recomputes leading whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndentOptions {
    /// Ceiling on the computed indent, in spaces. `None` leaves the
    /// nesting depth unbounded.
    pub max_indent: Option<usize>,
    /// Spaces added or removed per nesting level.
    pub multiple_of: usize,
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            max_indent: None,
            multiple_of: 2,
        }
    }
}

/// Bullet (`*`, `-`, `+`) or ordered (`1.`) list marker followed by
/// whitespace, with its original leading indentation.
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)([*+-]|\d+\.)\s").unwrap());

/// Recomputes the leading whitespace of every line in `text`.
///
/// The scan is a single pass with one line of lookahead, carrying the
/// current nesting level and a fence tracker:
///
/// 1. Lines inside a fenced code block (and the fence markers themselves)
///    are copied verbatim.
/// 2. A line starting with `#` resets the level to zero and is emitted
///    with its original content.
/// 3. A list-marker line is re-indented to the current level, keeping the
///    marker and a single space before the trimmed content.
/// 4. A blank line is emitted empty.
/// 5. Any other line is re-indented to the current level with its content
///    trimmed.
///
/// Nesting follows the *original* indentation of consecutive lines: after
/// a list line whose successor is a deeper list item, the level grows by
/// one step; whenever the successor is a shallower list item, the level
/// shrinks by one step, floored at zero. Trailing whitespace is stripped
/// from every emitted line, and a final newline survives the round trip.
pub fn fix_indentation(text: &str, opts: &IndentOptions) -> String {
    let step = opts.multiple_of.max(1);
    let lines: Vec<&str> = text.split('\n').map(str::trim_end).collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut level = 0usize;
    let mut fence = FenceTracker::new();

    for (i, &line) in lines.iter().enumerate() {
        let trimmed = line.trim_start();
        let was_inside = fence.in_fence();
        let is_fence_line = fence.observe(trimmed);
        if was_inside || is_fence_line {
            out.push(line.to_string());
            continue;
        }

        let marker = split_list_marker(line);
        if line.starts_with('#') {
            level = 0;
            out.push(line.to_string());
        } else if let Some((marker, content)) = marker {
            out.push(format!("{}{} {}", " ".repeat(level), marker, content.trim()));
        } else if trimmed.is_empty() {
            out.push(String::new());
        } else {
            out.push(format!("{}{}", " ".repeat(level), trimmed));
        }

        // Lookahead adjustments compare the original leading whitespace of
        // this line and the next; blank lines have no measurable indent and
        // never participate.
        let Some(&next) = lines.get(i + 1) else {
            continue;
        };
        let (Some(current_indent), Some(next_indent)) = (indent_width(line), indent_width(next))
        else {
            continue;
        };
        if !LIST_MARKER.is_match(next) {
            continue;
        }

        if marker.is_some() && next_indent > current_indent {
            level += step;
            if let Some(cap) = opts.max_indent {
                level = level.min(cap);
            }
        }
        if next_indent < current_indent {
            level = level.saturating_sub(step);
        }
    }

    out.join("\n")
}

/// Splits a list line into its marker and the content after it.
fn split_list_marker(line: &str) -> Option<(&str, &str)> {
    let caps = LIST_MARKER.captures(line)?;
    let marker = caps.get(2)?.as_str();
    let content = &line[caps.get(0)?.end()..];
    Some((marker, content))
}

/// Width of the leading whitespace in characters, or `None` for a line
/// with no content.
fn indent_width(line: &str) -> Option<usize> {
    let mut width = 0usize;
    for c in line.chars() {
        if c.is_whitespace() {
            width += 1;
        } else {
            return Some(width);
        }
    }
    None
}
