//! Error types for rotator construction and configuration.

use thiserror::Error;

/// Errors produced while building a rotator.
///
/// Running out of capacity is not an error; selection reports it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotatorError {
    /// No model configurations were supplied.
    #[error("at least one model must be configured")]
    EmptyPool,
    /// A model configuration omits a required field.
    #[error("model #{index} is missing required field `{field}`")]
    MissingField {
        /// Position of the offending entry in the input list.
        index: usize,
        /// Name of the absent field.
        field: &'static str,
    },
    /// A model name is present but empty.
    #[error("model #{index} has an empty name")]
    EmptyName {
        /// Position of the offending entry in the input list.
        index: usize,
    },
    /// Priority label is not one of the recognized tiers.
    #[error("invalid priority: {0}. Must be 'high', 'medium', or 'low'")]
    InvalidPriority(String),
    /// Limit must allow at least one call per window.
    #[error("model `{name}` has limit 0; limit must be greater than 0")]
    InvalidLimit {
        /// Model name.
        name: String,
    },
    /// The sliding window has zero length.
    #[error("window must be greater than 0")]
    InvalidWindow,
    /// Configuration text could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
