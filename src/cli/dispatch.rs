// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::{apply_overrides, GuardianConfig};
use crate::error::{ConfigError, GuardianError, Result, ResultExt};
use crate::rules::{print_results, summary, RuleEngine, RuleKind, ValidationResult};

use super::args::{CheckArgs, Cli, Commands, HooksAction, InitArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match &cli.command {
        Commands::Version => return run_version(),
        Commands::Init(args) => return run_init(args),
        Commands::Rules => return run_rules(&cli),
        _ => {}
    }

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        GuardianConfig::load_from(config_path)?
    } else {
        GuardianConfig::load()?
    };

    if !config.ui.color {
        console::set_colors_enabled(false);
    }

    match &cli.command {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Hooks(args) => run_hooks(&config, &args.action),
        Commands::Version | Commands::Init(_) | Commands::Rules => Ok(()),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &GuardianConfig, args: &CheckArgs) -> Result<()> {
    let rules = apply_overrides(config.rules.clone(), args.overrides());
    tracing::debug!("Running check with rules: {:?}", rules);

    let engine = RuleEngine::new(rules);

    if let Some(rev) = &args.rev {
        return run_check_history(cli, &engine, rev);
    }

    let path = args.file.as_ref().ok_or_else(|| GuardianError::WithContext {
        context: "check".to_string(),
        message: "commit message file path is required".to_string(),
    })?;

    let raw = std::fs::read_to_string(path).context("Error reading commit message file")?;
    let outcome = engine.check_text(&raw);

    match cli.format {
        Some(OutputFormat::Json) => {
            let result = ValidationResult::new(path.display().to_string(), raw.as_str(), &outcome);
            print_results(&[result], cli.format);
        }
        _ => {
            if let Ok(ref message) = outcome {
                println!("{} {}", console::style("✓").green().bold(), message.header());
            }
        }
    }

    outcome.map(|_| ())
}

/// Check commits from history, reporting every one.
fn run_check_history(cli: &Cli, engine: &RuleEngine, rev: &str) -> Result<()> {
    let results: Vec<ValidationResult> = engine
        .check_range(rev)?
        .into_iter()
        .map(|(sha, message, outcome)| ValidationResult::new(sha, message, &outcome))
        .collect();

    print_results(&results, cli.format);
    if cli.format != Some(OutputFormat::Json) {
        println!("{}", summary(&results));
    }

    let failed = results.iter().filter(|r| !r.is_valid()).count();
    if failed > 0 {
        Err(GuardianError::CommitsFailed {
            failed,
            total: results.len(),
        })
    } else {
        Ok(())
    }
}

/// List the registered rules.
fn run_rules(cli: &Cli) -> Result<()> {
    if cli.format == Some(OutputFormat::Json) {
        let json: Vec<_> = RuleKind::all()
            .map(|rule| {
                serde_json::json!({
                    "name": rule.name(),
                    "description": rule.description(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
        return Ok(());
    }

    for rule in RuleKind::all() {
        println!(
            "{:<15} {}",
            console::style(rule.name()).cyan(),
            rule.description()
        );
    }
    Ok(())
}

/// Run the hooks command.
fn run_hooks(config: &GuardianConfig, action: &HooksAction) -> Result<()> {
    use crate::hooks::{HookManager, COMMIT_MSG_HOOK};

    tracing::debug!("Running hooks command: {:?}", action);

    let manager = HookManager::new()?;

    match action {
        HooksAction::Install { force } => {
            manager.install(&config.hooks.args, *force)?;
            println!("✓ Installed {} hook", COMMIT_MSG_HOOK);
        }
        HooksAction::Uninstall => {
            manager.uninstall()?;
            println!("✓ Uninstalled {} hook", COMMIT_MSG_HOOK);
        }
        HooksAction::Status => {
            let icon = if manager.is_installed() { "✓" } else { "✗" };
            println!("{} {}", icon, COMMIT_MSG_HOOK);
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("guardian {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: &InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    let config_path = std::path::Path::new(crate::config::CONFIG_FILES[0]);

    if config_path.exists() && !args.force {
        return Err(GuardianError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).context("init")?;

    println!("✓ Created {}", config_path.display());

    Ok(())
}
