//! Error types for qbook operations.
//!
//! This module defines [`QbookError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Record loading is tolerant by design: an unrecognized qualification
//!   token degrades to `Unknown` and is reported through an
//!   [`ErrorCallback`](crate::records::ErrorCallback), never through this
//!   type. `QbookError` is reserved for genuine failures.
//! - Use `QbookError` for failures that need distinct handling (catalog
//!   I/O, malformed input)
//! - Use `anyhow::Error` (via `QbookError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for qbook operations.
#[derive(Debug, Error)]
pub enum QbookError {
    /// Translation catalog file not found at the given location.
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Failed to parse a translation catalog file.
    #[error("Failed to parse catalog at {path}: {message}")]
    CatalogParseError { path: PathBuf, message: String },

    /// A format version string is not of the form `major.minor`.
    #[error("Invalid format version: {value}")]
    InvalidVersion { value: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for qbook operations.
pub type Result<T> = std::result::Result<T, QbookError>;
