//! Error types for the roster pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering, parsing or writing
#[derive(Error, Debug)]
pub enum Error {
    /// The input directory could not be listed
    #[error("Failed to list {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A message file could not be read from disk
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the message structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Failed to decode message content
    #[error("Failed to decode content: {0}")]
    Decode(String),

    /// One or more required registration fields were not found
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The workbook could not be built or saved
    #[error("Failed to write workbook {}: {details}", path.display())]
    Write { path: PathBuf, details: String },

    /// The working directory could not be resolved
    #[error("Failed to resolve working directory: {0}")]
    WorkingDir(std::io::Error),
}

impl Error {
    /// Whether this error means the message was readable but not a registration
    #[must_use]
    pub const fn is_missing_fields(&self) -> bool {
        matches!(self, Self::MissingFields(_))
    }
}

/// Result type for roster operations
pub type Result<T> = std::result::Result<T, Error>;
