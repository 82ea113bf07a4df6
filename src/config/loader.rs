// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and CLI overrides.

use crate::error::{ConfigError, GuardianError, Result};
use std::path::{Path, PathBuf};

use super::schema::{GuardianConfig, RulesConfig};

/// Configuration file names to search for, in order of priority.
pub const CONFIG_FILES: &[&str] = &["guardian.toml", ".guardian.toml", ".config/guardian.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // XDG config directory
    let xdg = dirs::config_dir()?.join("guardian").join("config.toml");
    xdg.exists().then_some(xdg)
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<GuardianConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(GuardianConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<GuardianConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(GuardianError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        GuardianError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<GuardianConfig> {
    toml::from_str(content).map_err(|e| {
        GuardianError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Rule settings given on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct RuleOverrides {
    pub type_rules: Option<Vec<String>>,
    pub scope_rules: Option<Vec<String>>,
    pub description_rules: Option<Vec<String>>,
    pub require_blank_line: bool,
}

/// Apply command-line overrides on top of the loaded rules.
pub fn apply_overrides(base: RulesConfig, overrides: RuleOverrides) -> RulesConfig {
    RulesConfig {
        type_rules: overrides
            .type_rules
            .map(normalize_rule_list)
            .unwrap_or(base.type_rules),
        scope_rules: overrides
            .scope_rules
            .map(normalize_rule_list)
            .unwrap_or(base.scope_rules),
        description_rules: overrides
            .description_rules
            .map(normalize_rule_list)
            .unwrap_or(base.description_rules),
        require_blank_line: overrides.require_blank_line || base.require_blank_line,
    }
}

/// Trim entries and drop empty ones, so `"latinOnly, digitsOnly"` and `""`
/// behave the way a shell user expects.
fn normalize_rule_list(rules: Vec<String>) -> Vec<String> {
    rules
        .into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, GuardianConfig::default());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[rules]
type = ["allowLatin"]
scope = ["allowScope"]
require_blank_line = true

[hooks]
args = ["--description-rules", "noCyrillic,noDigits"]

[ui]
color = false
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.rules.type_rules, vec!["allowLatin"]);
        assert_eq!(config.rules.scope_rules, vec!["allowScope"]);
        // Unset keys keep their defaults
        assert_eq!(config.rules.description_rules, vec!["noCyrillic"]);
        assert!(config.rules.require_blank_line);
        assert_eq!(config.hooks.args.len(), 2);
        assert!(!config.ui.color);
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = parse_config("[rules]\ntype = 3\n");
        assert!(matches!(
            result,
            Err(GuardianError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("nope.toml"));
        assert!(matches!(
            result,
            Err(GuardianError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_find_config_in_parent_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".guardian.toml"), "[rules]\n").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".guardian.toml"));
    }

    #[test]
    fn test_overrides_replace_per_field() {
        let merged = apply_overrides(
            RulesConfig::default(),
            RuleOverrides {
                scope_rules: Some(vec!["allowScope".to_string()]),
                ..Default::default()
            },
        );
        assert_eq!(merged.type_rules, vec!["latinOnly"]);
        assert_eq!(merged.scope_rules, vec!["allowScope"]);
        assert_eq!(merged.description_rules, vec!["noCyrillic"]);
    }

    #[test]
    fn test_overrides_are_trimmed() {
        let merged = apply_overrides(
            RulesConfig::default(),
            RuleOverrides {
                type_rules: Some(vec![" noDigits".to_string(), "".to_string()]),
                description_rules: Some(vec![]),
                require_blank_line: true,
                ..Default::default()
            },
        );
        assert_eq!(merged.type_rules, vec!["noDigits"]);
        assert!(merged.description_rules.is_empty());
        assert!(merged.require_blank_line);
    }
}
