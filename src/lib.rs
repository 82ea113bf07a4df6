// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! guardian - commit message policy checker
//!
//! Parses a commit message header (`type(scope): description`) and applies
//! configurable character-class rules to each field, stopping at the first
//! violation.
//!
//! # Features
//!
//! - **Header Parser**: Conventional header grammar with a closed type vocabulary
//! - **Rule Registry**: Named Latin/Cyrillic/digit rules, looked up case-insensitively
//! - **Rule Engine**: Ordered per-field rule lists with fail-fast reporting
//! - **Git Hooks**: Installs a small `commit-msg` shell hook that calls `guardian check`, backing up any existing hook
//!
//! # Example
//!
//! ```
//! use guardian::commit::CommitMessage;
//! use guardian::config::RulesConfig;
//! use guardian::rules::RuleEngine;
//!
//! let message = CommitMessage::parse("fix: handle empty input").unwrap();
//! let engine = RuleEngine::new(RulesConfig::default());
//! assert!(engine.validate(&message).is_ok());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

// Re-exports for convenience
pub use config::GuardianConfig;
pub use error::{GuardianError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of guardian.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
