//! Error types for the layout engine.
//!
//! Layout itself never fails: missing text, overlong rows and oversized
//! values all degrade silently. Errors only come from producing bytes,
//! loading configuration and packaging finished documents.

/// Result type alias for layout engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while producing or packaging documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error for configuration and form files
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Archive container error
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two documents share the same archive entry name
    #[error("Duplicate archive entry: {0}")]
    DuplicateEntry(String),

    /// Archive requested with no documents
    #[error("Cannot build an archive with no documents")]
    EmptyArchive,
}
