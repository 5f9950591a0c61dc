//! Error types and handling infrastructure for courtrank.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! ## Design Principles
//!
//! - **User-friendly messages**: Errors should provide actionable feedback
//! - **Context preservation**: Include relevant information for debugging
//! - **Failure, not degradation**: a failed load or parse aborts dataset
//!   construction entirely; there is no partial dataset
//! - **Consistency**: Standardized Result type across all modules

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for courtrank operations.
///
/// Covers dataset retrieval, CSV parsing, and UI failures. Individual rows
/// missing required fields are deliberately NOT represented here: the ranking
/// engine drops them silently as a data-quality tolerance policy.
#[derive(Error, Debug)]
pub enum CourtrankError {
    /// Raw dataset text could not be retrieved from the source
    #[error("Failed to load dataset: {message}")]
    LoadError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file not found specifically (common case for user feedback)
    #[error("Dataset not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// Retrieved text could not be tokenized into rows/columns
    #[error("Failed to parse dataset: {message}")]
    ParseError { message: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for courtrank operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the courtrank codebase.
pub type Result<T> = std::result::Result<T, CourtrankError>;

impl CourtrankError {
    /// Create a LoadError from an io::Error with additional context
    pub fn load(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::LoadError {
            message: message.into(),
            source,
        }
    }

    /// Create a ParseError with a descriptive message
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error to CourtrankError
impl From<std::io::Error> for CourtrankError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::LoadError {
                // Path context is lost here; call sites that know the path
                // should use SourceNotFound instead.
                message: "Dataset not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::LoadError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::LoadError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

// CSV reader failures are parse errors by definition: the text was retrieved
// but could not be tokenized.
impl From<csv::Error> for CourtrankError {
    fn from(err: csv::Error) -> Self {
        Self::ParseError {
            message: err.to_string(),
        }
    }
}
