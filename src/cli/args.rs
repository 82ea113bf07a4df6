// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::config::RuleOverrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// guardian - commit message policy checker
///
/// Enforces a conventional header and per-field character-class rules,
/// typically from a commit-msg hook.
#[derive(Parser, Debug)]
#[command(name = "guardian")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit message policy checker", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a commit message file, or commits from history
    Check(CheckArgs),

    /// List the available rules
    Rules,

    /// Manage the commit-msg hook
    Hooks(HooksArgs),

    /// Write an example guardian.toml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Commit message file (as passed to the commit-msg hook)
    #[arg(value_name = "FILE", required_unless_present = "rev", conflicts_with = "rev")]
    pub file: Option<PathBuf>,

    /// Check a commit or a range (A..B) from the current repository instead
    #[arg(long, value_name = "REV")]
    pub rev: Option<String>,

    /// Comma-separated rules for the commit type
    #[arg(long, env = "GUARDIAN_TYPE_RULES", value_delimiter = ',', value_name = "RULES")]
    pub type_rules: Option<Vec<String>>,

    /// Comma-separated rules for the commit scope
    #[arg(long, env = "GUARDIAN_SCOPE_RULES", value_delimiter = ',', value_name = "RULES")]
    pub scope_rules: Option<Vec<String>>,

    /// Comma-separated rules for the commit description
    #[arg(
        long,
        env = "GUARDIAN_DESCRIPTION_RULES",
        value_delimiter = ',',
        value_name = "RULES"
    )]
    pub description_rules: Option<Vec<String>>,

    /// Require a blank line between header and body
    #[arg(long)]
    pub require_blank_line: bool,
}

impl CheckArgs {
    /// Rule settings that override the configuration file.
    pub fn overrides(&self) -> RuleOverrides {
        RuleOverrides {
            type_rules: self.type_rules.clone(),
            scope_rules: self.scope_rules.clone(),
            description_rules: self.description_rules.clone(),
            require_blank_line: self.require_blank_line,
        }
    }
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install the commit-msg hook
    Install {
        /// Replace (and back up) a hook guardian did not write
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall the commit-msg hook
    Uninstall,

    /// Show hook status
    Status,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_file() {
        let args = Cli::parse_from([
            "guardian",
            "check",
            ".git/COMMIT_EDITMSG",
            "--type-rules",
            "allowLatin",
            "--scope-rules",
            "allowScope,noDigits",
        ]);
        let Commands::Check(check) = args.command else {
            panic!("Expected Check command");
        };
        assert_eq!(check.file, Some(PathBuf::from(".git/COMMIT_EDITMSG")));
        assert_eq!(check.type_rules, Some(vec!["allowLatin".to_string()]));
        assert_eq!(
            check.scope_rules,
            Some(vec!["allowScope".to_string(), "noDigits".to_string()])
        );
        assert!(check.rev.is_none());
    }

    #[test]
    fn test_parse_check_rev() {
        let args = Cli::parse_from(["guardian", "check", "--rev", "HEAD~5..HEAD"]);
        let Commands::Check(check) = args.command else {
            panic!("Expected Check command");
        };
        assert_eq!(check.rev.as_deref(), Some("HEAD~5..HEAD"));
        assert!(check.file.is_none());
    }

    #[test]
    fn test_check_requires_file_or_rev() {
        assert!(Cli::try_parse_from(["guardian", "check"]).is_err());
        assert!(Cli::try_parse_from(["guardian", "check", "msg", "--rev", "HEAD"]).is_err());
    }

    #[test]
    fn test_parse_hooks() {
        let args = Cli::parse_from(["guardian", "hooks", "install", "--force"]);
        assert!(matches!(
            args.command,
            Commands::Hooks(HooksArgs {
                action: HooksAction::Install { force: true }
            })
        ));
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["guardian", "rules", "--format", "json", "--no-color", "-d"]);
        assert!(matches!(args.command, Commands::Rules));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.no_color);
        assert!(args.debug);
    }

    #[test]
    fn test_overrides_from_args() {
        let args = CheckArgs {
            description_rules: Some(vec!["noDigits".to_string()]),
            require_blank_line: true,
            ..Default::default()
        };
        let overrides = args.overrides();
        assert!(overrides.type_rules.is_none());
        assert_eq!(overrides.description_rules, Some(vec!["noDigits".to_string()]));
        assert!(overrides.require_blank_line);
    }
}
