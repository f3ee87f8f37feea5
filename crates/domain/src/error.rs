//! Template error types

use thiserror::Error;

use crate::key::Key;
use crate::value::Value;

/// Errors raised while constructing or rendering a template.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TemplateError {
    /// A configured validator rejected a bound value during render.
    #[error("invalid value for key \"{key}\": {value}")]
    Validation {
        /// The key whose validator rejected the value.
        key: Key,
        /// The raw bound value that was rejected.
        value: Value,
    },

    /// The fragment and key sequences cannot alternate.
    #[error("mismatched template shape: {fragments} fragments cannot interleave {keys} keys")]
    Shape {
        /// Number of fragments supplied.
        fragments: usize,
        /// Number of keys supplied.
        keys: usize,
    },
}

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
