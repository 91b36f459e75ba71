//! The registry of named transformations.
//!
//! A closed enum maps each registered name to its implementation; no
//! reflection or dynamic dispatch is involved. The `all` marker expands
//! to every entry in the registry's fixed default order.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use textfmt_core::{
    IndentOptions, capitalize, collapse_newlines, collapse_spaces, fix_indentation, limit_text,
    strip_non_ascii, trim, wrap_lines,
};

use crate::error::FormatError;
use crate::options::{LimitSpec, WrapSpec};

/// Marker name that expands to every registered transformation in the
/// default order.
pub const ALL_OPTION: &str = "all";

/// A resolved transformation, ready to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformation {
    /// Collapse lone newlines to spaces, keeping paragraph breaks.
    CollapseNewlines,
    /// Strip leading and trailing whitespace.
    Trim,
    /// Capitalize sentence-initial letters.
    Capitalize,
    /// Collapse whitespace runs to single spaces.
    CollapseSpaces,
    /// Recompute leading whitespace from list nesting.
    FixIndentation(IndentOptions),
    /// Drop characters outside the 7-bit ASCII range.
    StripNonAscii,
    /// Truncate to the first N characters, words, or sentences.
    Limit(LimitSpec),
    /// Re-flow text into bounded lines.
    Wrap(WrapSpec),
}

impl Transformation {
    /// The registered name of this transformation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CollapseNewlines => "collapse-newlines",
            Self::Trim => "trim",
            Self::Capitalize => "capitalize",
            Self::CollapseSpaces => "collapse-spaces",
            Self::FixIndentation(_) => "fix-indentation",
            Self::StripNonAscii => "strip-non-ascii",
            Self::Limit(_) => "limit",
            Self::Wrap(_) => "wrap",
        }
    }

    /// Looks up a registered name, decoding `params` where the
    /// transformation takes a record. Returns `Ok(None)` for names the
    /// registry does not know.
    pub fn resolve(
        name: &str,
        params: Option<&JsonValue>,
    ) -> Result<Option<Self>, FormatError> {
        let transformation = match name {
            "collapse-newlines" => Self::CollapseNewlines,
            "trim" => Self::Trim,
            "capitalize" => Self::Capitalize,
            "collapse-spaces" => Self::CollapseSpaces,
            "fix-indentation" => Self::FixIndentation(decode_params(name, params)?),
            "strip-non-ascii" => Self::StripNonAscii,
            "limit" => Self::Limit(decode_params(name, params)?),
            "wrap" => Self::Wrap(decode_params(name, params)?),
            _ => return Ok(None),
        };
        Ok(Some(transformation))
    }

    /// Applies this transformation to `text`.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::CollapseNewlines => collapse_newlines(text),
            Self::Trim => Cow::Borrowed(trim(text)),
            Self::Capitalize => capitalize(text),
            Self::CollapseSpaces => collapse_spaces(text),
            Self::FixIndentation(opts) => Cow::Owned(fix_indentation(text, opts)),
            Self::StripNonAscii => strip_non_ascii(text),
            Self::Limit(spec) => limit_text(text, spec.effective_limit(), spec.mode),
            Self::Wrap(spec) => wrap_lines(text, spec.effective_limit(), spec.mode),
        }
    }
}

/// Every registered transformation with default parameters, in the fixed
/// order used by the [`ALL_OPTION`] marker.
pub fn default_pipeline() -> Vec<Transformation> {
    vec![
        Transformation::CollapseNewlines,
        Transformation::Trim,
        Transformation::Capitalize,
        Transformation::CollapseSpaces,
        Transformation::FixIndentation(IndentOptions::default()),
        Transformation::StripNonAscii,
        Transformation::Limit(LimitSpec::default()),
        Transformation::Wrap(WrapSpec::default()),
    ]
}

fn decode_params<T>(name: &str, params: Option<&JsonValue>) -> Result<T, FormatError>
where
    T: Default + DeserializeOwned,
{
    match params {
        None => Ok(T::default()),
        Some(value) => {
            serde_json::from_value(value.clone()).map_err(|source| FormatError::InvalidParams {
                name: name.to_string(),
                source,
            })
        }
    }
}
