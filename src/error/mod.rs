// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for repoconv.
//!
//! Only programmer errors (bad inputs), configuration problems and
//! cancellation surface here. Per-file read failures and a missing git
//! repository are absorbed where they happen and never reach the caller.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for repoconv operations.
#[derive(Error, Debug)]
pub enum RepoconvError {
    // Invalid root or inventory passed to the engine
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON rendering errors
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Caller asked the analysis to stop
    #[error("Analysis cancelled")]
    Cancelled,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Invalid arguments handed to the analysis engine.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Root path must be absolute: {path}")]
    RelativeRoot { path: PathBuf },

    #[error("Root path is not a directory: {path}")]
    RootNotDirectory { path: PathBuf },

    #[error("Inconsistent inventory entry '{path}': {reason}")]
    InconsistentEntry { path: PathBuf, reason: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
///
/// These stay inside the git module; the porcelain turns them into empty
/// results before they reach the engine.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Repository has no commits yet")]
    UnbornHead,

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Result type alias for repoconv operations.
pub type Result<T> = std::result::Result<T, RepoconvError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RepoconvError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
