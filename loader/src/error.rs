//! Error types for document loading and the baseline check.
//!
//! Everything here is fatal in the sense of the linting contract: a
//! [`LoaderError`] describes a run that could not happen (missing file,
//! unparsable bytes, a broken baseline schema), never a defect inside a
//! readable document — those are reported as violations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or pre-checking a document.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or conversion failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document path does not exist.
    #[error("file '{0}' cannot be found")]
    FileNotFound(PathBuf),

    /// The document extension maps to no supported format.
    #[error("unsupported document extension: '{0}'")]
    UnsupportedExtension(String),

    /// The embedded baseline schema failed to compile.
    #[error("invalid baseline schema: {0}")]
    InvalidBaseline(String),
}

/// Convenience alias for results with [`LoaderError`].
pub type Result<T> = std::result::Result<T, LoaderError>;
