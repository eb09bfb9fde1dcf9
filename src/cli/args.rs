// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cclint - conventional commit header linter
///
/// Lints commit message headers against a configurable rule set.
#[derive(Parser, Debug)]
#[command(name = "cclint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit header linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Treat failing warnings as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (TOML, or JSON with a .json extension)
    #[arg(short, long, global = true, env = "CCLINT_CONFIG")]
    pub config: Option<PathBuf>,
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
    /// Lint a commit message from an argument, a file, or stdin
    Lint(LintArgs),

    /// Lint commit messages from git history
    Check(CheckArgs),

    /// List registered rules
    Rules,

    /// Write an example configuration file
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Default, Clone)]
pub struct LintArgs {
    /// Commit message text
    #[arg(conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the message from a file such as .git/COMMIT_EDITMSG
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Show passing rules as well as failures
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit or range to check
    #[arg(default_value = "HEAD")]
    pub target: String,

    /// Show passing rules as well as failures
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Where to write the configuration
    #[arg(long, default_value = "cclint.toml")]
    pub path: PathBuf,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
            verbose: false,
        }
    }
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
    fn test_parse_lint_message() {
        let args = Cli::parse_from(["cclint", "lint", "feat: add x"]);
        if let Commands::Lint(lint) = args.command {
            assert_eq!(lint.message.as_deref(), Some("feat: add x"));
            assert!(lint.file.is_none());
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_parse_lint_file_conflicts_with_message() {
        let result = Cli::try_parse_from(["cclint", "lint", "feat: x", "--file", "MSG"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from(["cclint", "check", "HEAD~5..HEAD", "--strict"]);
        assert!(args.strict);
        if let Commands::Check(check_args) = args.command {
            assert_eq!(check_args.target, "HEAD~5..HEAD");
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_check_default_target() {
        let args = Cli::parse_from(["cclint", "check"]);
        if let Commands::Check(check_args) = args.command {
            assert_eq!(check_args.target, "HEAD");
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from([
            "cclint", "--format", "json", "--config", "c.toml", "rules",
        ]);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(args.command, Commands::Rules));
    }
}
