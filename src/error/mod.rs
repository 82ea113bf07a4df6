// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for guardian.
//!
//! The parser and the rule engine each return a narrow error type
//! ([`ParseError`], [`ValidationError`]); everything the CLI touches is
//! lifted into [`GuardianError`] with `?`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for guardian operations.
#[derive(Error, Debug)]
pub enum GuardianError {
    // Commit message structure errors
    #[error("Error parsing commit message: {0}")]
    Parse(#[from] ParseError),

    // Rule errors
    #[error("Commit message validation failed: {0}")]
    Validation(#[from] ValidationError),

    // History checks
    #[error("{failed} of {total} commits failed validation")]
    CommitsFailed { failed: usize, total: usize },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Errors produced while splitting a raw message into its parts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid commit message format: '{header}'")]
    MalformedHeader { header: String },

    #[error("invalid commit type: {commit_type}")]
    InvalidCommitType { commit_type: String },

    #[error("missing blank line between header and body")]
    MissingBlankLine,
}

/// The part of the header a rule was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Type,
    Scope,
    Description,
}

impl Field {
    /// Name used in error messages and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Scope => "scope",
            Field::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the rule engine. Both variants are terminal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown rule: {name}")]
    UnknownRule { name: String },

    #[error("{field} validation failed: {rule}: {reason}")]
    RuleRejected {
        field: Field,
        rule: String,
        reason: String,
    },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
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

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook} (use --force to replace it)")]
    AlreadyExists { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for guardian operations.
pub type Result<T> = std::result::Result<T, GuardianError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GuardianError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
