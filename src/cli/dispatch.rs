// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;

use crate::commit::strip_comments;
use crate::config::{example_config, CclintConfig};
use crate::error::{CclintError, LintError, Result, ResultExt};
use crate::rules::{LintResult, Linter, RuleRegistry};

use super::args::{CheckArgs, Cli, Commands, InitArgs, LintArgs};
use super::report;

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command.clone() {
        Commands::Lint(args) => run_lint(&cli, args),
        Commands::Check(args) => run_check(&cli, args),
        Commands::Rules => run_rules(),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Load configuration and build the linter before touching any message.
fn prepare(cli: &Cli) -> Result<(CclintConfig, Linter)> {
    let config = match &cli.config {
        Some(path) => CclintConfig::load_from(path)?,
        None => {
            tracing::debug!("No configuration given, using the conventional preset");
            CclintConfig::default()
        }
    };
    let linter = Linter::new(&config.rules, &RuleRegistry::with_builtin_rules())?;
    Ok((config, linter))
}

/// Run the lint command.
fn run_lint(cli: &Cli, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let (config, linter) = prepare(cli)?;

    let text = match (&args.message, &args.file) {
        (Some(message), _) => message.clone(),
        (None, Some(path)) => {
            let raw = std::fs::read_to_string(path)
                .context(format!("reading {}", path.display()))?;
            strip_comments(&raw)
        }
        (None, None) => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("reading stdin")?;
            strip_comments(&raw)
        }
    };

    let result = linter.lint(&text);
    report::print(std::slice::from_ref(&result), cli.format, args.verbose);
    verdict(&[result], cli.strict || config.strict)
}

/// Run the check command.
fn run_check(cli: &Cli, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let (config, linter) = prepare(cli)?;

    let commits = crate::git::get_commit_range(&args.target)?;
    let (shas, messages): (Vec<String>, Vec<String>) = commits.into_iter().unzip();

    let results: Vec<LintResult> = linter
        .lint_batch(&messages)
        .into_iter()
        .zip(shas)
        .map(|(result, sha)| result.with_commit(sha))
        .collect();

    report::print(&results, cli.format, args.verbose);
    verdict(&results, cli.strict || config.strict)
}

/// Decide the exit status from a set of results.
fn verdict(results: &[LintResult], strict: bool) -> Result<()> {
    let invalid = results.iter().filter(|r| !r.is_valid()).count();
    if invalid > 0 {
        return Err(CclintError::Lint(LintError::Invalid { count: invalid }));
    }

    let warnings: usize = results.iter().map(|r| r.warnings().count()).sum();
    if strict && warnings > 0 {
        return Err(CclintError::Lint(LintError::StrictWarnings { count: warnings }));
    }

    Ok(())
}

/// Run the rules command.
fn run_rules() -> Result<()> {
    let registry = RuleRegistry::with_builtin_rules();
    for name in registry.names() {
        println!("{}", name);
    }
    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    if args.path.exists() && !args.force {
        return Err(CclintError::WithContext {
            context: "init".to_string(),
            message: format!(
                "{} already exists (use --force to overwrite)",
                args.path.display()
            ),
        });
    }

    std::fs::write(&args.path, example_config()).map_err(|e| CclintError::WithContext {
        context: "init".to_string(),
        message: format!("Failed to write configuration: {}", e),
    })?;

    println!("✓ Created {}", args.path.display());
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("{}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Applicability, RuleConfig, RuleEntry, RuleValue, Severity};

    fn results_for(severity: Severity, header: &str) -> Vec<LintResult> {
        let config = RuleConfig::new()
            .with(
                "type-enum",
                RuleEntry::new(severity, Applicability::Always)
                    .with_value(RuleValue::list(["feat", "fix"])),
            )
            .unwrap();
        let linter = Linter::with_builtin_rules(&config).unwrap();
        vec![linter.lint(header)]
    }

    #[test]
    fn test_verdict_valid() {
        assert!(verdict(&results_for(Severity::Error, "feat: x"), false).is_ok());
    }

    #[test]
    fn test_verdict_invalid() {
        let err = verdict(&results_for(Severity::Error, "oops: x"), false).unwrap_err();
        assert!(matches!(
            err,
            CclintError::Lint(LintError::Invalid { count: 1 })
        ));
    }

    #[test]
    fn test_verdict_strict_warnings() {
        let results = results_for(Severity::Warning, "oops: x");
        assert!(verdict(&results, false).is_ok());
        assert!(matches!(
            verdict(&results, true),
            Err(CclintError::Lint(LintError::StrictWarnings { count: 1 }))
        ));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cclint.toml");
        run_init(InitArgs {
            force: false,
            path: path.clone(),
        })
        .unwrap();
        assert!(path.exists());

        let err = run_init(InitArgs {
            force: false,
            path: path.clone(),
        })
        .unwrap_err();
        assert!(!err.is_config());
        assert!(err.to_string().contains("already exists"));

        assert!(run_init(InitArgs { force: true, path }).is_ok());
    }
}
