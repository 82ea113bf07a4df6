// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in character-class rules and the registry that names them.
//!
//! Three families live here and must not be folded into each other:
//!
//! - `noX` rules reject text that contains a script at all.
//! - `xOnly` rules accept the script plus whitespace and punctuation.
//! - `allowX` rules additionally admit digits and hyphens, and do not
//!   require the script to be present.
//!
//! `allowScope` is the odd one out: an ASCII shape check for scope names.

use crate::error::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref CYRILLIC: Regex = Regex::new(r"\p{Cyrillic}").unwrap();
    static ref LATIN: Regex = Regex::new(r"\p{Latin}").unwrap();
    static ref DIGIT: Regex = Regex::new(r"\p{Nd}").unwrap();

    static ref OUTSIDE_CYRILLIC: Regex = Regex::new(r"[^\p{Cyrillic}\s\p{P}]").unwrap();
    static ref OUTSIDE_LATIN: Regex = Regex::new(r"[^\p{Latin}\s\p{P}]").unwrap();
    static ref OUTSIDE_DIGITS: Regex = Regex::new(r"[^\p{Nd}\s\p{P}]").unwrap();

    static ref OUTSIDE_LATIN_PERMISSIVE: Regex =
        Regex::new(r"[^\p{Latin}\p{Nd}\s\p{P}-]").unwrap();
    static ref OUTSIDE_CYRILLIC_PERMISSIVE: Regex =
        Regex::new(r"[^\p{Cyrillic}\p{Nd}\s\p{P}-]").unwrap();

    static ref SCOPE_SHAPE: Regex =
        Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$").unwrap();
}

/// Registration table: lower-cased lookup key to rule.
///
/// Adding a rule means adding a variant and one row here.
const REGISTRY: &[(&str, RuleKind)] = &[
    ("nocyrillic", RuleKind::NoCyrillic),
    ("nolatin", RuleKind::NoLatin),
    ("nodigits", RuleKind::NoDigits),
    ("cyrilliconly", RuleKind::CyrillicOnly),
    ("latinonly", RuleKind::LatinOnly),
    ("digitsonly", RuleKind::DigitsOnly),
    ("allowlatin", RuleKind::AllowLatin),
    ("allowcyrillic", RuleKind::AllowCyrillic),
    ("allowdigits", RuleKind::AllowDigits),
    ("allowscope", RuleKind::AllowScope),
];

/// How a rule's pattern decides.
#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// Reject when the pattern is found anywhere in the text.
    Forbids(&'static Regex),
    /// Reject unless the pattern matches the text.
    Requires(&'static Regex),
}

impl Matcher {
    fn accepts(self, text: &str) -> bool {
        match self {
            Matcher::Forbids(re) => !re.is_match(text),
            Matcher::Requires(re) => re.is_match(text),
        }
    }
}

/// A named, stateless character-class predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    NoCyrillic,
    NoLatin,
    NoDigits,
    CyrillicOnly,
    LatinOnly,
    DigitsOnly,
    AllowLatin,
    AllowCyrillic,
    AllowDigits,
    AllowScope,
}

/// Why a rule turned a piece of text down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    /// The rule that rejected the text.
    pub rule: RuleKind,
    /// Human-readable reason.
    pub reason: &'static str,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.reason)
    }
}

impl RuleKind {
    /// Look a rule up by name, ignoring case.
    pub fn resolve(name: &str) -> Result<Self, ValidationError> {
        let key = name.to_lowercase();
        let found = REGISTRY
            .iter()
            .find(|(registered, _)| *registered == key)
            .map(|(_, kind)| *kind);

        tracing::debug!("Resolved rule {:?} to {:?}", name, found);

        found.ok_or_else(|| ValidationError::UnknownRule {
            name: name.to_string(),
        })
    }

    /// Every registered rule, in registration order.
    pub fn all() -> impl Iterator<Item = RuleKind> {
        REGISTRY.iter().map(|(_, kind)| *kind)
    }

    /// Canonical name, as written in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::NoCyrillic => "noCyrillic",
            RuleKind::NoLatin => "noLatin",
            RuleKind::NoDigits => "noDigits",
            RuleKind::CyrillicOnly => "cyrillicOnly",
            RuleKind::LatinOnly => "latinOnly",
            RuleKind::DigitsOnly => "digitsOnly",
            RuleKind::AllowLatin => "allowLatin",
            RuleKind::AllowCyrillic => "allowCyrillic",
            RuleKind::AllowDigits => "allowDigits",
            RuleKind::AllowScope => "allowScope",
        }
    }

    /// What the rule accepts, for `guardian rules`.
    pub fn description(&self) -> &'static str {
        match self {
            RuleKind::NoCyrillic => "No Cyrillic letters",
            RuleKind::NoLatin => "No Latin letters",
            RuleKind::NoDigits => "No decimal digits",
            RuleKind::CyrillicOnly => "Only Cyrillic letters, spaces and punctuation",
            RuleKind::LatinOnly => "Only Latin letters, spaces and punctuation",
            RuleKind::DigitsOnly => "Only digits, spaces and punctuation",
            RuleKind::AllowLatin => "Latin letters, digits, spaces, punctuation and hyphens",
            RuleKind::AllowCyrillic => {
                "Cyrillic letters, digits, spaces, punctuation and hyphens"
            }
            RuleKind::AllowDigits => "Digits, Latin letters, spaces, punctuation and hyphens",
            RuleKind::AllowScope => {
                "Latin letters, digits and inner hyphens; starts and ends alphanumeric"
            }
        }
    }

    fn reason(&self) -> &'static str {
        match self {
            RuleKind::NoCyrillic => "text contains Cyrillic characters",
            RuleKind::NoLatin => "text contains Latin characters",
            RuleKind::NoDigits => "text contains digits",
            RuleKind::CyrillicOnly => "text contains non-Cyrillic characters",
            RuleKind::LatinOnly => "text contains non-Latin characters",
            RuleKind::DigitsOnly => "text contains non-digit characters",
            RuleKind::AllowLatin | RuleKind::AllowDigits => {
                "text contains characters that are not Latin, digits, spaces, or punctuation"
            }
            RuleKind::AllowCyrillic => {
                "text contains characters that are not Cyrillic, digits, spaces, or punctuation"
            }
            RuleKind::AllowScope => {
                "scope must start and end with alphanumeric character and contain only Latin letters, digits, and hyphens"
            }
        }
    }

    fn matcher(&self) -> Matcher {
        match self {
            RuleKind::NoCyrillic => Matcher::Forbids(&CYRILLIC),
            RuleKind::NoLatin => Matcher::Forbids(&LATIN),
            RuleKind::NoDigits => Matcher::Forbids(&DIGIT),
            RuleKind::CyrillicOnly => Matcher::Forbids(&OUTSIDE_CYRILLIC),
            RuleKind::LatinOnly => Matcher::Forbids(&OUTSIDE_LATIN),
            RuleKind::DigitsOnly => Matcher::Forbids(&OUTSIDE_DIGITS),
            RuleKind::AllowLatin | RuleKind::AllowDigits => {
                Matcher::Forbids(&OUTSIDE_LATIN_PERMISSIVE)
            }
            RuleKind::AllowCyrillic => Matcher::Forbids(&OUTSIDE_CYRILLIC_PERMISSIVE),
            RuleKind::AllowScope => Matcher::Requires(&SCOPE_SHAPE),
        }
    }

    /// Apply the rule to `text`.
    pub fn validate(&self, text: &str) -> Result<(), Rejection> {
        if self.matcher().accepts(text) {
            Ok(())
        } else {
            Err(Rejection {
                rule: *self,
                reason: self.reason(),
            })
        }
    }
}

impl std::str::FromStr for RuleKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::resolve(s)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rule(rule: RuleKind, accepted: &[&str], rejected: &[&str]) {
        for text in accepted {
            assert!(
                rule.validate(text).is_ok(),
                "{} should accept {:?}",
                rule,
                text
            );
        }
        for text in rejected {
            let rejection = rule.validate(text).unwrap_err();
            assert_eq!(rejection.rule, rule, "{} rejecting {:?}", rule, text);
        }
    }

    #[test]
    fn test_resolve_every_registered_name() {
        for kind in RuleKind::all() {
            assert_eq!(RuleKind::resolve(kind.name()).unwrap(), kind);
        }
        assert_eq!(RuleKind::all().count(), 10);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(
            RuleKind::resolve("NOCYRILLIC").unwrap(),
            RuleKind::resolve("noCyrillic").unwrap()
        );
        assert_eq!(RuleKind::resolve("NoLaTiN").unwrap(), RuleKind::NoLatin);
        assert_eq!("allowscope".parse::<RuleKind>(), Ok(RuleKind::AllowScope));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(
            RuleKind::resolve("nonexistent"),
            Err(ValidationError::UnknownRule {
                name: "nonexistent".to_string()
            })
        );
        assert!(RuleKind::resolve("").is_err());
        assert!(RuleKind::resolve(" latinOnly").is_err());
    }

    #[test]
    fn test_no_cyrillic() {
        assert_rule(
            RuleKind::NoCyrillic,
            &["Hello world", "Hello 123", "Hello, world!"],
            &["Hello привет", "привет", "Hello привет 123"],
        );
        assert_eq!(
            RuleKind::NoCyrillic.validate("привет").unwrap_err().reason,
            "text contains Cyrillic characters"
        );
    }

    #[test]
    fn test_no_latin() {
        assert_rule(
            RuleKind::NoLatin,
            &["привет", "привет 123", "привет, мир!"],
            &["привет hello", "hello", "hello привет 123"],
        );
    }

    #[test]
    fn test_no_digits() {
        assert_rule(
            RuleKind::NoDigits,
            &["Hello world", "привет мир", "Hello, world!"],
            &["Hello 123", "123", "Hello 123 привет"],
        );
    }

    #[test]
    fn test_cyrillic_only() {
        assert_rule(
            RuleKind::CyrillicOnly,
            &["привет", "привет мир", "привет, мир!"],
            &["привет hello", "привет 123", "hello привет 123"],
        );
    }

    #[test]
    fn test_latin_only() {
        assert_rule(
            RuleKind::LatinOnly,
            &["Hello", "Hello world", "Hello, world!"],
            &["Hello привет", "Hello 123", "Hello привет 123"],
        );
    }

    #[test]
    fn test_digits_only() {
        assert_rule(
            RuleKind::DigitsOnly,
            &["123", "123 456", "123, 456!"],
            &["123 hello", "123 привет", "hello 123 привет"],
        );
    }

    #[test]
    fn test_allow_family_admits_digits_and_hyphens() {
        assert_rule(
            RuleKind::AllowLatin,
            &["Hello", "Hello, world!", "Hello 123", "Hello-world", "123"],
            &["Hello привет", "привет"],
        );
        assert_rule(
            RuleKind::AllowCyrillic,
            &["привет", "привет, мир!", "привет 123", "привет-мир", "123"],
            &["привет hello", "hello"],
        );
        assert_rule(
            RuleKind::AllowDigits,
            &["123", "123, 456!", "hello 123", "hello", "hello-123"],
            &["123 привет", "привет"],
        );
    }

    #[test]
    fn test_families_stay_distinct() {
        // latinOnly refuses digits, allowLatin does not
        assert!(RuleKind::LatinOnly.validate("v2").is_err());
        assert!(RuleKind::AllowLatin.validate("v2").is_ok());
        // noLatin accepts anything without Latin, including emoji
        assert!(RuleKind::NoLatin.validate("🚀").is_ok());
        assert!(RuleKind::CyrillicOnly.validate("🚀").is_err());
    }

    #[test]
    fn test_allow_scope() {
        assert_rule(
            RuleKind::AllowScope,
            &["T1", "T-1", "task-123", "my-task-123", "a-1", "1-a", "T", "7"],
            &[
                "",
                "-T1",
                "T1-",
                "-",
                "task-привет",
                "task 123",
                "task.123",
                "task_123",
            ],
        );
    }

    #[test]
    fn test_rejection_display() {
        let rejection = RuleKind::NoDigits.validate("abc1").unwrap_err();
        assert_eq!(rejection.to_string(), "noDigits: text contains digits");
    }
}
