//! Error types for the embedgen-core library.
//!
//! A closed set of failure modes built on `thiserror`: the conversion either
//! cannot find its input, cannot read it, or cannot write the artifact.
//! Identifier derivation and formatting are total and never fail.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for embedgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all embedgen operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Input path missing or not a regular file
    #[error("input file '{path}' does not exist or is not a regular file")]
    InputNotFound {
        /// The offending input path
        path: PathBuf,
    },

    /// Failed to read the input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new input-not-found error
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new file write error
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}
