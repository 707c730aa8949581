//! Error types for srccat.
//!
//! Every failure is fatal to the run: there is no retry or
//! skip-and-continue policy. A read or write error mid-run leaves the
//! output file in whatever partial state it had.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all srccat operations.
#[derive(Error, Debug)]
pub enum SrccatError {
    /// The output file could not be created or truncated.
    #[error("Failed to create output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matching input file could not be opened, read, or decoded as UTF-8.
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record or the final flush could not be written.
    #[error("Failed to write output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl SrccatError {
    /// Create a file read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create an output write error.
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteOutput {
            path: path.into(),
            source,
        }
    }

    /// Get the root cause of the error chain.
    pub fn root_cause(&self) -> &dyn std::error::Error {
        let mut current: &dyn std::error::Error = self;
        while let Some(source) = current.source() {
            current = source;
        }
        current
    }
}

/// Result type alias for srccat operations.
pub type Result<T> = std::result::Result<T, SrccatError>;
