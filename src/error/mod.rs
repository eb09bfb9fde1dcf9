// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cclint.
//!
//! Configuration problems and runtime failures are kept apart: a
//! [`ConfigError`] means the lint run could not be set up at all, while a
//! [`LintError`] reports that a message was evaluated and found invalid.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cclint operations.
#[derive(Error, Debug)]
pub enum CclintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Lint failures surfaced to the process boundary
    #[error("Lint failed: {0}")]
    Lint(#[from] LintError),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl CclintError {
    /// Whether this error stems from configuration rather than evaluation.
    pub fn is_config(&self) -> bool {
        matches!(self, CclintError::Config(_))
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown rule '{name}'")]
    UnknownRule { name: String },

    #[error("Invalid severity for '{rule}': {message}")]
    InvalidSeverity { rule: String, message: String },

    #[error("Invalid applicability for '{rule}': {message}")]
    InvalidApplicability { rule: String, message: String },

    #[error("Invalid value for '{rule}': {message}")]
    InvalidValue { rule: String, message: String },

    #[error("Empty value set for '{rule}': an empty list rejects every message")]
    EmptySet { rule: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Lint failures reported at the process boundary.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("{count} message(s) failed linting")]
    Invalid { count: usize },

    #[error("{count} warning(s) in strict mode")]
    StrictWarnings { count: usize },
}

/// Result type alias for cclint operations.
pub type Result<T> = std::result::Result<T, CclintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CclintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
