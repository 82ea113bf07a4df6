// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from guardian.toml.

use serde::{Deserialize, Serialize};

/// The main configuration structure for guardian.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuardianConfig {
    /// Rule configuration.
    pub rules: RulesConfig,

    /// Hook configuration.
    pub hooks: HooksConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl GuardianConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Which rules run against which header field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rules applied to the commit type.
    #[serde(rename = "type")]
    pub type_rules: Vec<String>,

    /// Rules applied to the scope, when there is one.
    #[serde(rename = "scope")]
    pub scope_rules: Vec<String>,

    /// Rules applied to the description.
    #[serde(rename = "description")]
    pub description_rules: Vec<String>,

    /// Whether a blank line must separate header and body.
    pub require_blank_line: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            type_rules: vec!["latinOnly".to_string()],
            scope_rules: vec!["latinOnly".to_string(), "digitsOnly".to_string()],
            description_rules: vec!["noCyrillic".to_string()],
            require_blank_line: false,
        }
    }
}

/// Hooks configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HooksConfig {
    /// Extra arguments appended to `guardian check` in the commit-msg hook.
    pub args: Vec<String>,
}

/// UI/UX configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
