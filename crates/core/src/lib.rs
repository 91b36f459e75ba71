#![deny(missing_docs)]
//! textfmt core: pure text cleanup primitives.
//!
//! Every function here is a total mapping over `&str` with no state beyond
//! the call; the named-option pipeline lives in the `textfmt` crate.

/// ASCII filtering.
pub mod ascii;
/// Sentence-initial capitalization.
pub mod capitalize;
/// Fenced code block tracking.
pub mod fence;
/// Indentation normalization.
pub mod indent;
/// Length limiting.
pub mod limit;
/// Whitespace normalization primitives.
pub mod whitespace;
/// Line re-flow.
pub mod wrap;

pub use ascii::strip_non_ascii;
pub use capitalize::capitalize;
pub use fence::FenceTracker;
pub use indent::{IndentOptions, fix_indentation};
pub use limit::{LimitMode, limit_text};
pub use whitespace::{collapse_newlines, collapse_spaces, trim};
pub use wrap::{WrapMode, wrap_lines};
