// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation report types.

use crate::cli::args::OutputFormat;
use crate::commit::CommitMessage;
use crate::error::{Field, GuardianError, ParseError, Result, ValidationError};
use console::style;

/// The single problem that stopped a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Error code for programmatic handling.
    pub code: &'static str,
    /// Header field the failing rule ran against.
    pub field: Option<Field>,
    /// Rule name, for rule errors.
    pub rule: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl ValidationIssue {
    /// Describe an error from the parse/validate pipeline.
    pub fn from_error(err: &GuardianError) -> Self {
        let (code, field, rule) = match err {
            GuardianError::Parse(ParseError::MalformedHeader { .. }) => {
                ("malformed-header", None, None)
            }
            GuardianError::Parse(ParseError::InvalidCommitType { .. }) => {
                ("invalid-commit-type", None, None)
            }
            GuardianError::Parse(ParseError::MissingBlankLine) => {
                ("missing-blank-line", None, None)
            }
            GuardianError::Validation(ValidationError::UnknownRule { name }) => {
                ("unknown-rule", None, Some(name.clone()))
            }
            GuardianError::Validation(ValidationError::RuleRejected { field, rule, .. }) => {
                ("rule-rejected", Some(*field), Some(rule.clone()))
            }
            _ => ("error", None, None),
        };

        let message = match err {
            GuardianError::Parse(inner) => inner.to_string(),
            GuardianError::Validation(inner) => inner.to_string(),
            other => other.to_string(),
        };

        Self {
            code,
            field,
            rule,
            message,
        }
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        format!(
            "{} {} {}",
            style("✗").red().bold(),
            style(self.code).red(),
            self.message
        )
    }
}

/// Result of checking one commit message.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Where the message came from: a file path or a commit SHA.
    pub source: String,
    /// The raw message.
    pub message: String,
    /// What stopped the check, if anything.
    pub issue: Option<ValidationIssue>,
}

impl ValidationResult {
    /// Build a result from a pipeline outcome.
    pub fn new(
        source: impl Into<String>,
        message: impl Into<String>,
        outcome: &Result<CommitMessage>,
    ) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
            issue: outcome.as_ref().err().map(ValidationIssue::from_error),
        }
    }

    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        self.issue.is_none()
    }

    fn first_line(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Print in text format.
    pub fn print_text(&self) {
        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        let is_sha = self.source.len() == 40 && self.source.bytes().all(|b| b.is_ascii_hexdigit());
        let source = if is_sha {
            &self.source[..7]
        } else {
            &self.source
        };
        println!("{} {} {}", status, style(source).cyan(), self.first_line());

        if let Some(ref issue) = self.issue {
            println!("  {}", issue.format());
        }
    }

    /// JSON representation.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "source": self.source,
            "header": self.first_line(),
            "error": self.issue.as_ref().map(|issue| {
                serde_json::json!({
                    "code": issue.code,
                    "field": issue.field.map(|f| f.as_str()),
                    "rule": issue.rule,
                    "message": issue.message,
                })
            }),
        })
    }
}

/// Print a batch of results.
pub fn print_results(results: &[ValidationResult], format: Option<OutputFormat>) {
    match format {
        Some(OutputFormat::Json) => {
            let json = if results.len() == 1 {
                results[0].to_json()
            } else {
                serde_json::Value::Array(results.iter().map(ValidationResult::to_json).collect())
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        _ => {
            for result in results {
                result.print_text();
            }
        }
    }
}

/// One-line summary for a batch.
pub fn summary(results: &[ValidationResult]) -> String {
    let failed = results.iter().filter(|r| !r.is_valid()).count();
    if failed == 0 {
        format!("{} commit(s) valid", results.len())
    } else {
        format!("{} of {} commit(s) invalid", failed, results.len())
    }
}
