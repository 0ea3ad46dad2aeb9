//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// General I/O error (config file, analytics log)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a configuration document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
