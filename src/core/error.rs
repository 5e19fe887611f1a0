//! Error types for the context logger

use super::context_store::ContextHandle;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Context handle was never created or has been deleted
    #[error("Context {handle} not found")]
    ContextNotFound { handle: ContextHandle },

    /// Required context key had no value (absent or explicitly null)
    #[error("Context key ({handle})[\"{key}\"] has no value")]
    MissingValue { handle: ContextHandle, key: String },

    /// Format capability failure
    #[error("Format error ({format}): {message}")]
    FormatError { format: String, message: String },

    /// Output capability failure with sink name
    #[error("Output error ({output}): {message}")]
    OutputError { output: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create a not-found error for a dead or unknown handle
    pub fn not_found(handle: ContextHandle) -> Self {
        LoggerError::ContextNotFound { handle }
    }

    /// Create a missing-value error for a required read
    pub fn missing_value(handle: ContextHandle, key: impl Into<String>) -> Self {
        LoggerError::MissingValue {
            handle,
            key: key.into(),
        }
    }

    /// Create a format error
    pub fn format(format: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatError {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(output: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::OutputError {
            output: output.into(),
            message: message.into(),
        }
    }
}
