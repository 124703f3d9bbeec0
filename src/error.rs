//! Error handling module for tipscope
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Library code returns these; configuration loading uses anyhow on top.

use thiserror::Error;

/// Main error type for tipscope
#[derive(Error, Debug)]
pub enum TipsError {
    /// IO errors (cache files, output artefact)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding errors (malformed rows, unknown categories)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP transport errors while downloading a dataset
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The dataset could not be retrieved from its source
    #[error("Dataset '{name}' unavailable: {reason}")]
    DatasetUnavailable { name: String, reason: String },

    /// A column was requested that the table does not have
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// A derived column could not be attached to the table
    #[error("Invalid column '{name}': {reason}")]
    InvalidColumn { name: String, reason: String },

    /// Plot rendering or encoding errors
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for tipscope operations
pub type Result<T> = std::result::Result<T, TipsError>;

// Convenient error constructors
impl TipsError {
    /// Create a dataset-unavailable error
    pub fn unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DatasetUnavailable {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid column error
    pub fn invalid_column(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColumn {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
