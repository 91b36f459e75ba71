//! The pipeline runner.

use std::borrow::Cow;

use crate::error::FormatError;
use crate::options::TransformOption;
use crate::registry::{ALL_OPTION, Transformation, default_pipeline};

/// Resolves option records into transformations, in order.
///
/// Unknown names are skipped with a warning rather than failing the whole
/// pipeline. If the [`ALL_OPTION`] marker appears anywhere in the list,
/// the result is the full default-order registry instead.
pub fn resolve(options: &[TransformOption]) -> Result<Vec<Transformation>, FormatError> {
    if options.iter().any(|option| option.name == ALL_OPTION) {
        return Ok(default_pipeline());
    }

    let mut resolved = Vec::with_capacity(options.len());
    for option in options {
        match Transformation::resolve(&option.name, option.params.as_ref())? {
            Some(transformation) => resolved.push(transformation),
            None => log::warn!("ignoring unknown transformation `{}`", option.name),
        }
    }
    Ok(resolved)
}

/// Applies the selected transformations to `text`, left to right.
///
/// An empty option list returns the input unchanged. The result is a pure
/// function of the input and the options.
pub fn format(text: &str, options: &[TransformOption]) -> Result<String, FormatError> {
    let transformations = resolve(options)?;

    let mut current = Cow::Borrowed(text);
    for transformation in &transformations {
        log::debug!("applying `{}`", transformation.name());
        let next = transformation.apply(current.as_ref());
        current = Cow::Owned(next.into_owned());
    }
    Ok(current.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_option_list_returns_input() {
        assert_eq!(format("  as is  ", &[]).unwrap(), "  as is  ");
    }

    #[test]
    fn single_option_applies() {
        let options = [TransformOption::new("trim")];
        assert_eq!(format("  padded  ", &options).unwrap(), "padded");
    }

    #[test]
    fn options_apply_left_to_right() {
        // Limiting to 2 words then wrapping differs from the reverse order.
        let limit_then_wrap = [
            TransformOption::with_params("limit", json!({"limit": 2, "mode": "words"})),
            TransformOption::with_params("wrap", json!({"limit": 1, "mode": "words"})),
        ];
        assert_eq!(format("a b c", &limit_then_wrap).unwrap(), "a\nb");

        let wrap_then_limit = [
            TransformOption::with_params("wrap", json!({"limit": 1, "mode": "words"})),
            TransformOption::with_params("limit", json!({"limit": 2, "mode": "words"})),
        ];
        assert_eq!(format("a b c", &wrap_then_limit).unwrap(), "a b");
    }

    #[test]
    fn unknown_names_are_skipped() {
        let with_unknown = [
            TransformOption::new("trim"),
            TransformOption::new("polish"),
            TransformOption::new("capitalize"),
        ];
        let without = [
            TransformOption::new("trim"),
            TransformOption::new("capitalize"),
        ];
        assert_eq!(
            format(" hello. world ", &with_unknown).unwrap(),
            format(" hello. world ", &without).unwrap()
        );
    }

    #[test]
    fn bad_params_surface_as_errors() {
        let options = [TransformOption::with_params("wrap", json!({"limit": true}))];
        assert!(format("text", &options).is_err());
    }

    #[test]
    fn all_marker_overrides_the_explicit_list() {
        let resolved = resolve(&[
            TransformOption::new("trim"),
            TransformOption::new(ALL_OPTION),
        ])
        .unwrap();
        assert_eq!(resolved, default_pipeline());
    }

    #[test]
    fn repeated_options_apply_repeatedly() {
        let options = [
            TransformOption::with_params("limit", json!({"limit": 4, "mode": "characters"})),
            TransformOption::with_params("limit", json!({"limit": 2, "mode": "characters"})),
        ];
        assert_eq!(format("abcdef", &options).unwrap(), "ab");
    }
}
