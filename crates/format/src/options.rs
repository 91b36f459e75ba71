//! User-facing option records.
//!
//! Options arrive from host applications as JSON-shaped records (a name
//! plus an optional parameter object) and decode into the typed parameter
//! structs consumed by the registry.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use textfmt_core::{LimitMode, WrapMode};

/// A user-selected transformation name plus optional parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOption {
    /// Registered transformation name (e.g. `"trim"`, `"fix-indentation"`).
    pub name: String,
    /// Parameter record for transformations that take one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<JsonValue>,
}

impl TransformOption {
    /// Option with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: None,
        }
    }

    /// Option with a parameter record.
    pub fn with_params(name: impl Into<String>, params: JsonValue) -> Self {
        Self {
            name: name.into(),
            params: Some(params),
        }
    }
}

/// Parameters for the `limit` transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LimitSpec {
    /// Number of units to keep; zero or negative disables the limit.
    pub limit: i64,
    /// Unit of truncation.
    pub mode: LimitMode,
}

impl LimitSpec {
    /// Limit as a count; non-positive values disable the transformation.
    pub fn effective_limit(&self) -> usize {
        usize::try_from(self.limit).unwrap_or(0)
    }
}

/// Parameters for the `wrap` transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WrapSpec {
    /// Maximum line length in units; zero or negative disables wrapping.
    pub limit: i64,
    /// Unit of line measurement.
    pub mode: WrapMode,
}

impl WrapSpec {
    /// Limit as a count; non-positive values disable the transformation.
    pub fn effective_limit(&self) -> usize {
        usize::try_from(self.limit).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_decodes_from_json() {
        let option: TransformOption =
            serde_json::from_value(json!({"name": "limit", "params": {"limit": 5}})).unwrap();
        assert_eq!(option.name, "limit");
        assert!(option.params.is_some());
    }

    #[test]
    fn params_field_may_be_absent() {
        let option: TransformOption = serde_json::from_value(json!({"name": "trim"})).unwrap();
        assert!(option.params.is_none());
    }

    #[test]
    fn limit_spec_decodes_mode_names() {
        let spec: LimitSpec =
            serde_json::from_value(json!({"limit": 3, "mode": "sentences"})).unwrap();
        assert_eq!(spec.limit, 3);
        assert_eq!(spec.mode, LimitMode::Sentences);
    }

    #[test]
    fn negative_limit_is_disabled() {
        let spec = LimitSpec {
            limit: -4,
            mode: LimitMode::Words,
        };
        assert_eq!(spec.effective_limit(), 0);
    }

    #[test]
    fn wrap_spec_defaults_are_a_noop() {
        let spec: WrapSpec = serde_json::from_value(json!({})).unwrap();
        assert_eq!(spec.effective_limit(), 0);
        assert_eq!(spec.mode, WrapMode::Characters);
    }
}
