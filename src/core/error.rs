//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`PorcelainError`], the error type returned by the status
//! provider, the configuration loader and the CLI, and [`ParseError`], the
//! line-level error produced by the status parser. Parse errors are never fatal:
//! the parser collects them next to its best-effort result and the caller decides
//! what to do with them.
//!
//! # Public API
//! - [`PorcelainError`]: Main error enum covering all failure modes
//! - [`ParseError`]: Line-level parser errors (malformed header or entry)
//! - [`Result<T>`]: Type alias for `std::result::Result<T, PorcelainError>`
//!
//! # Error Categories
//! - **Repository discovery**: Not a repository, git2 library errors
//! - **Running git**: Spawn failures, non-zero exits, invalid UTF-8 output
//! - **Parsing**: Malformed `branch.ab` headers, short XY codes ([`ParseError`],
//!   kept in the parse report and never returned as a [`PorcelainError`])
//! - **Configuration**: Unreadable or invalid config files

use std::path::PathBuf;
use thiserror::Error;

/// Line-level errors reported by the status parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed header '{line}': {reason}")]
    MalformedHeader { line: String, reason: String },

    #[error("Malformed entry '{line}': {reason}")]
    MalformedEntry { line: String, reason: String },
}

impl ParseError {
    /// Create a malformed header error
    pub fn malformed_header(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed entry error
    pub fn malformed_entry(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedEntry {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

/// Domain-specific error types for porcelain
#[derive(Error, Debug)]
pub enum PorcelainError {
    // Repository errors
    #[error("Not a git repository")]
    NotARepository,

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    // Running git
    #[error("git command failed: {message}")]
    GitCommandFailed { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid UTF-8 in git output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using PorcelainError
pub type Result<T> = std::result::Result<T, PorcelainError>;

impl PorcelainError {
    /// Create a git command failed error
    pub fn git_command_failed(message: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            message: message.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Outside a repository the tool stays silent instead of failing
    pub fn is_not_a_repository(&self) -> bool {
        matches!(self, PorcelainError::NotARepository)
    }
}
