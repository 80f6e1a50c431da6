// src/error.rs

use thiserror::Error;

/// Core error types for repo
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database file missing or unreadable
    #[error("Cannot open database '{0}'")]
    DatabaseNotFound(String),

    /// Directory could not be read, or an entry could not be stat'ed
    #[error("Failed to scan directory: {0}")]
    ScanError(String),

    /// The package filename grammar failed to compile
    #[error("Invalid package pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// No package files exist for a name
    #[error("Did not find any files for package '{0}'")]
    NoPackageFiles(String),

    /// External repo-add/repo-remove could not be run or failed
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// Configuration file missing or incomplete
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias using repo's Error type
pub type Result<T> = std::result::Result<T, Error>;
