//! Error types for igc-sync operations.
//!
//! This module defines [`SyncError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A malformed track file name is not an error; the archiver logs it and
//!   moves on to the next file
//! - Every filesystem failure is a `SyncError` and aborts the run
//! - Use `anyhow::Error` (via `SyncError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for igc-sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The input directory does not exist.
    #[error("Input directory not found: {path}")]
    InputNotFound { path: PathBuf },

    /// The input path exists but is not a directory.
    #[error("Input is not a directory: {path}")]
    InputNotDirectory { path: PathBuf },

    /// The input path cannot be turned into a search pattern.
    #[error("Invalid search pattern for {path}: {message}")]
    InvalidPattern { path: PathBuf, message: String },

    /// A directory could not be read while searching for tracks.
    #[error("Failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A destination directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A track file could not be copied into the archive.
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for igc-sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
