// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use super::types::CommitType;
use crate::error::ParseError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Header grammar: `type(scope): description`, scope optional.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>[0-9A-Za-z_]+)(?:\((?P<scope>[0-9A-Za-z_-]+)\))?: (?P<description>.+)$"
    ).unwrap();
}

/// A parsed commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// Commit type (feat, fix, etc.).
    pub commit_type: CommitType,
    /// Optional scope; `None` when the header has no parentheses.
    pub scope: Option<String>,
    /// Text after `": "` on the header line.
    pub description: String,
    /// Everything after the header line, trimmed. May be empty.
    pub body: String,
}

impl CommitMessage {
    /// Create a new commit message.
    pub fn new(commit_type: CommitType, description: impl Into<String>) -> Self {
        Self {
            commit_type,
            scope: None,
            description: description.into(),
            body: String::new(),
        }
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Parse a commit message from a string.
    ///
    /// Only the first line is matched against the header grammar. A
    /// grammar failure always wins over an unknown type.
    pub fn parse(message: &str) -> Result<Self, ParseError> {
        let (header, rest) = match message.split_once('\n') {
            Some((header, rest)) => (header, Some(rest)),
            None => (message, None),
        };

        let captures = HEADER_REGEX
            .captures(header)
            .ok_or_else(|| ParseError::MalformedHeader {
                header: header.to_string(),
            })?;

        let type_str = &captures["type"];
        let commit_type =
            type_str
                .parse::<CommitType>()
                .map_err(|_| ParseError::InvalidCommitType {
                    commit_type: type_str.to_string(),
                })?;

        let scope = captures.name("scope").map(|m| m.as_str().to_string());
        let description = captures["description"].to_string();
        let body = rest.map(|r| r.trim().to_string()).unwrap_or_default();

        tracing::debug!(
            "Parsed header: type={} scope={:?} body_len={}",
            commit_type,
            scope,
            body.len()
        );

        Ok(Self {
            commit_type,
            scope,
            description,
            body,
        })
    }

    /// Scope text, empty when there is none.
    pub fn scope_str(&self) -> &str {
        self.scope.as_deref().unwrap_or("")
    }

    /// Get the first line (header) of the commit message.
    pub fn header(&self) -> String {
        let mut result = String::new();
        result.push_str(self.commit_type.as_str());

        if let Some(ref scope) = self.scope {
            result.push('(');
            result.push_str(scope);
            result.push(')');
        }

        result.push_str(": ");
        result.push_str(&self.description);

        result
    }
}
