//! Error types for pgbind

use std::time::Duration;
use thiserror::Error;

/// Result type alias for pgbind operations
pub type BindResult<T> = Result<T, BindError>;

/// Errors produced while scanning templates, encoding values or rendering SQL.
///
/// Reusing a cache key for a template of a different length is not an error
/// variant: it panics (see [`TemplateCache`](crate::TemplateCache)).
#[derive(Debug, Error)]
pub enum BindError {
    /// A `:` in the template is not followed by an identifier character
    #[error("Placeholder marker without a name at byte {position}")]
    EmptyPlaceholderMarker { position: usize },

    /// `bind` was called with an empty name
    #[error("Empty variable name")]
    EmptyVariableName,

    /// The placeholder already has a bound value
    #[error("Already bound: {0}")]
    DuplicateBind(String),

    /// `bind` was called after the SQL was rendered
    #[error("Bind after render: {0}")]
    BindAfterFinalize(String),

    /// A placeholder in the template has no bound value
    #[error("Bind value not found for: {0}")]
    MissingBindValue(String),

    /// Durations are rendered as `HH:MM:SS` and cannot exceed 24 hours
    #[error("Unsupported duration, value: {0:?}")]
    UnsupportedDurationRange(Duration),

    /// Serializing a structured value to JSON failed
    #[error("Serialization error: {0}")]
    StructuredSerializationFailure(String),
}

impl BindError {
    /// Create a missing bind value error
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingBindValue(name.into())
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::StructuredSerializationFailure(message.into())
    }

    /// The placeholder name this error refers to, if any
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::DuplicateBind(name)
            | Self::BindAfterFinalize(name)
            | Self::MissingBindValue(name) => Some(name),
            _ => None,
        }
    }

    /// Check if this is a template scan error
    pub fn is_scan_error(&self) -> bool {
        matches!(self, Self::EmptyPlaceholderMarker { .. })
    }

    /// Check if this is a missing bind value error
    pub fn is_missing_value(&self) -> bool {
        matches!(self, Self::MissingBindValue(_))
    }
}

impl From<serde_json::Error> for BindError {
    fn from(err: serde_json::Error) -> Self {
        Self::StructuredSerializationFailure(err.to_string())
    }
}
