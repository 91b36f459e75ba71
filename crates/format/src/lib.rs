#![deny(missing_docs)]
//! textfmt: named text cleanup transformations applied as a pipeline.
//!
//! Callers hand [`format`] an input string and an ordered list of
//! [`TransformOption`] records; each name is looked up in the registry and
//! the input is folded through the matching transformations left to right.

/// Pipeline error types.
pub mod error;
/// User-facing option records.
pub mod options;
/// The pipeline runner.
pub mod pipeline;
/// The registry of named transformations.
pub mod registry;

pub use error::FormatError;
pub use options::{LimitSpec, TransformOption, WrapSpec};
pub use pipeline::{format, resolve};
pub use registry::{ALL_OPTION, Transformation, default_pipeline};

pub use textfmt_core::{IndentOptions, LimitMode, WrapMode};
