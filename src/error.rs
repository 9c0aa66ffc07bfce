//! Error types for pdf-title-rename.
//!
//! Most failures in this tool are absorbed per file and only show up in the
//! run summary. The variants here are what the batch driver records for a
//! file, plus the few startup errors that end the process.
//!
//! # Error Categories
//!
//! - **I/O Errors**: input cannot be read, rename or filing failed
//! - **Configuration Errors**: empty or missing input arguments
//! - **Interactive Errors**: standard input closed while prompting

use std::io;
use std::path::PathBuf;

/// Result type alias for pdf-title-rename operations.
pub type Result<T> = std::result::Result<T, RenameError>;

/// Main error type for pdf-title-rename operations.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    /// Input file was not found.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input file could not be read.
    #[error("Failed to read file: {}\n  Reason: {source}", .path.display())]
    FailedToRead {
        /// Path to the input file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Renaming the file in place failed.
    #[error("Failed to rename {} to {}\n  Reason: {source}", .from.display(), .to.display())]
    RenameFailed {
        /// Current location of the file.
        from: PathBuf,
        /// Intended new location.
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Moving the renamed file into the destination directory failed.
    #[error("Failed to move {} into {}\n  Reason: {source}", .path.display(), .destination.display())]
    FilingFailed {
        /// Renamed file.
        path: PathBuf,
        /// Destination directory.
        destination: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The platform viewer could not be launched.
    #[error("Failed to open {} in a viewer: {reason}", .path.display())]
    FailedToOpenViewer {
        /// File that should have been opened.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Standard input was closed while waiting for an interactive command.
    #[error("Input closed while waiting for a command")]
    InputClosed,

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl RenameError {
    /// Create a FailedToRead error, mapping `NotFound` to [`RenameError::FileNotFound`].
    pub fn failed_to_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FailedToRead { path, source }
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Get the process exit code for an error that ends the run.
    ///
    /// Per-file errors are recorded in the run summary and never end the
    /// run, so only startup errors and closed input reach this.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputClosed => 130, // same as an interrupted prompt
            _ => 1,
        }
    }
}
