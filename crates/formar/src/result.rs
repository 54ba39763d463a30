//! Result and error types for Formar.

use thiserror::Error;

/// Result type for Formar operations
pub type FormarResult<T> = Result<T, FormarError>;

/// Errors that can occur in Formar
#[derive(Debug, Error)]
pub enum FormarError {
    /// A required element was not found in the tree
    #[error("No element matches '{selector}'")]
    MissingElement {
        /// Selector that matched nothing
        selector: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
