//! Error types for Laragen
//!
//! This module provides unified error handling across the generator,
//! covering argument parsing, file writing, and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Laragen
#[derive(Debug, Error)]
pub enum GeneratorError {
    // ========================================================================
    // Usage Errors
    // ========================================================================
    /// The command was invoked without a required argument
    #[error("Missing arguments: {0}")]
    MissingArguments(String),

    /// A column token did not follow the field:type[:modifier] shape
    #[error("Malformed column '{token}': expected field:type or field:type:modifier")]
    MalformedColumnSpec { token: String },

    // ========================================================================
    // Warning Conditions
    // ========================================================================
    /// An asset file name carried an extension the generator cannot route
    #[error("Unrecognized asset extension for '{0}': expected a .css or .js file")]
    UnknownAssetExtension(String),

    /// The target file is already present on disk
    #[error("File already exists: {0}")]
    FileAlreadyExists(PathBuf),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Config file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParse { path: PathBuf, message: String },
}

impl GeneratorError {
    /// Create a missing-arguments error
    pub fn missing_arguments(msg: impl Into<String>) -> Self {
        GeneratorError::MissingArguments(msg.into())
    }

    /// Create a malformed-column error
    pub fn malformed_column(token: impl Into<String>) -> Self {
        GeneratorError::MalformedColumnSpec {
            token: token.into(),
        }
    }

    /// Create a file write error
    pub fn file_write(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        GeneratorError::FileWrite {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a directory creation error
    pub fn directory_create(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        GeneratorError::DirectoryCreate {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Check if this error means the command line itself was wrong
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            GeneratorError::MissingArguments(_) | GeneratorError::MalformedColumnSpec { .. }
        )
    }

    /// Check if this error is reported as a warning while the batch continues
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            GeneratorError::UnknownAssetExtension(_) | GeneratorError::FileAlreadyExists(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            GeneratorError::Io(_)
                | GeneratorError::FileWrite { .. }
                | GeneratorError::DirectoryCreate { .. }
        )
    }
}

/// Result type alias using GeneratorError
pub type GeneratorResult<T> = Result<T, GeneratorError>;

// ============================================================================
// Tests
// ============================================================================
