// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::{layout, CommitMessage};
use crate::config::RulesConfig;
use crate::error::{Field, Result, ValidationError};
use crate::git;

use super::builtin::RuleKind;

/// Rule engine for validating commit messages.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: RulesConfig,
}

impl RuleEngine {
    /// Create a new rule engine with the given rule lists.
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// The rule lists this engine applies.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Validate a parsed commit message.
    ///
    /// Fields are checked type, scope, description. An empty scope skips the
    /// scope rules entirely. The first unknown rule name or rejection ends
    /// the run.
    pub fn validate(&self, message: &CommitMessage) -> std::result::Result<(), ValidationError> {
        validate_field(
            Field::Type,
            message.commit_type.as_str(),
            &self.config.type_rules,
        )?;

        let scope = message.scope_str();
        if !scope.is_empty() {
            validate_field(Field::Scope, scope, &self.config.scope_rules)?;
        }

        validate_field(
            Field::Description,
            &message.description,
            &self.config.description_rules,
        )
    }

    /// Parse, optionally check layout, and validate a raw message.
    pub fn check_text(&self, raw: &str) -> Result<CommitMessage> {
        let message = CommitMessage::parse(raw)?;
        if self.config.require_blank_line {
            layout::check_blank_line(raw)?;
        }
        self.validate(&message)?;
        Ok(message)
    }

    /// Check a commit, or every commit in an `A..B` range, returning each
    /// outcome with its SHA and raw message.
    pub fn check_range(&self, range: &str) -> Result<Vec<(String, String, Result<CommitMessage>)>> {
        let commits = git::get_commit_range(range)?;
        Ok(commits
            .into_iter()
            .map(|(oid, message)| {
                let outcome = self.check_text(&message);
                (oid, message, outcome)
            })
            .collect())
    }
}

/// Apply `rules` to `text` in order, stopping at the first problem.
pub fn validate_field(
    field: Field,
    text: &str,
    rules: &[String],
) -> std::result::Result<(), ValidationError> {
    for name in rules {
        let rule = RuleKind::resolve(name)?;
        rule.validate(text)
            .map_err(|rejection| ValidationError::RuleRejected {
                field,
                rule: rejection.rule.name().to_string(),
                reason: rejection.reason.to_string(),
            })?;
    }
    Ok(())
}
