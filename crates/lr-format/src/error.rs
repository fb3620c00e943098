//! Error types for log formatting.

use lr_redact::RedactionError;
use thiserror::Error;

/// Result type for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors produced while rendering a log entry or building a formatter.
#[derive(Error, Debug)]
pub enum FormatError {
    /// JSON encoding failed.
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while rendering.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An inner formatter could not render the entry.
    #[error("render failed: {0}")]
    Render(String),

    /// The redaction configuration is invalid.
    #[error(transparent)]
    Redaction(#[from] RedactionError),
}

impl FormatError {
    /// Create a render error.
    pub fn render(message: impl Into<String>) -> Self {
        FormatError::Render(message.into())
    }
}
