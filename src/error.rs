//! Error types for richtext-vdom.
//!
//! Conversion itself never fails: unsupported or malformed nodes produce
//! empty slots. The only fallible step is parsing JSON text before the
//! document reaches the adapter.

use thiserror::Error;

/// Errors that can occur before conversion starts.
#[derive(Debug, Error)]
pub enum RichTextError {
    /// Input text is not well-formed JSON
    #[error("invalid document json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fallible entry points.
pub type RichTextResult<T> = Result<T, RichTextError>;
