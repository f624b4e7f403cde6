//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Site configuration could not be read or is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// Preference store could not be read or written
    #[error("Preference store error: {0}")]
    Store(String),

    /// Layout report from the page could not be decoded
    #[error("Layout bridge error: {0}")]
    Bridge(String),

    /// Logging could not be initialised
    #[error("Logging error: {0}")]
    Logging(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
