//! Error types for configuration and trace loading.
//!
//! Dispatch itself never fails; these errors only surface at the edges of the
//! crate where files and JSON are read.

use thiserror::Error;

/// Errors that can occur while loading configuration or replay traces
#[derive(Error, Debug)]
pub enum InputError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A trace step that cannot be turned into a host event
    #[error("Invalid trace step {index}: {reason}")]
    InvalidTrace { index: usize, reason: String },
}

/// Result type alias for input configuration operations
pub type InputResult<T> = Result<T, InputError>;
