//! Pipeline error types.

use thiserror::Error;

/// Errors surfaced while assembling a pipeline from option records.
///
/// Transformations themselves never fail on string input; the only
/// fallible step is decoding a parameter record for a known option name.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A known option carried a `params` record that does not decode.
    #[error("invalid parameters for `{name}`: {source}")]
    InvalidParams {
        /// The option name whose parameters failed to decode.
        name: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}
