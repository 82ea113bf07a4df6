// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! [`RuleKind`] is the registry of named character-class rules;
//! [`RuleEngine`] applies configured rule lists to a parsed message.

mod builtin;
mod engine;
mod validator;

pub use builtin::{Rejection, RuleKind};
pub use engine::{validate_field, RuleEngine};
pub use validator::{print_results, summary, ValidationIssue, ValidationResult};
