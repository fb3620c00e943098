//! Error types for redaction configuration.

use thiserror::Error;

/// Result type for redaction operations.
pub type Result<T> = std::result::Result<T, RedactionError>;

/// Errors that can occur while building redactors.
///
/// Applying a redactor never fails; every variant here comes from
/// configuration (compiling patterns, reading policy files).
#[derive(Error, Debug)]
pub enum RedactionError {
    /// The redaction policy is malformed.
    #[error("policy error: {0}")]
    PolicyError(String),

    /// A custom redactor pattern failed to compile.
    #[error("pattern error in redactor '{name}': {message}")]
    PatternError { name: String, message: String },

    /// I/O error during policy file operations.
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl RedactionError {
    /// Build a pattern error from a regex compile failure.
    pub fn pattern(name: impl Into<String>, err: &regex::Error) -> Self {
        RedactionError::PatternError {
            name: name.into(),
            message: err.to_string(),
        }
    }
}
