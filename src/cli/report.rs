// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering lint results for the terminal.

use console::style;

use crate::config::Severity;
use crate::rules::{LintResult, RuleOutcome};

use super::args::OutputFormat;

/// Format a single outcome for terminal output.
pub fn format_outcome(outcome: &RuleOutcome) -> String {
    let prefix = match (outcome.passed, outcome.severity) {
        (true, _) => style("✓").green().bold(),
        (false, Severity::Error) => style("✗").red().bold(),
        (false, _) => style("⚠").yellow().bold(),
    };

    let body = match (outcome.passed, outcome.severity) {
        (true, _) => style(outcome.message.as_str()).dim(),
        (false, Severity::Error) => style(outcome.message.as_str()).red(),
        (false, _) => style(outcome.message.as_str()).yellow(),
    };

    format!("{} {}", prefix, body)
}

/// Render a result as text. Passing outcomes only appear when `verbose`.
pub fn render_text(result: &LintResult, verbose: bool) -> String {
    let mut lines = Vec::new();

    let status = if result.is_valid() {
        style("✓").green().bold()
    } else {
        style("✗").red().bold()
    };
    let mut heading = match result.commit_sha.as_deref() {
        Some(sha) => {
            let short_sha = &sha[..7.min(sha.len())];
            format!("{} {} {}", status, style(short_sha).cyan(), result.header())
        }
        None => format!("{} {}", status, result.header()),
    };
    if result.breaking {
        heading.push_str(&format!(" {}", style("[breaking]").magenta().bold()));
    }
    lines.push(heading);

    for outcome in &result.outcomes {
        if verbose || !outcome.passed {
            lines.push(format!("  {}", format_outcome(outcome)));
        }
    }

    lines.push(format!("  {}", style(result.summary()).dim()));
    lines.join("\n")
}

/// Render results as a JSON document.
pub fn render_json(results: &[LintResult]) -> String {
    let json = serde_json::json!({
        "valid": results.iter().all(LintResult::is_valid),
        "results": results,
    });
    serde_json::to_string_pretty(&json).unwrap_or_default()
}

/// Print results to stdout.
pub fn print(results: &[LintResult], format: Option<OutputFormat>, verbose: bool) {
    match format {
        Some(OutputFormat::Json) => println!("{}", render_json(results)),
        _ => {
            for result in results {
                println!("{}", render_text(result, verbose));
            }
        }
    }
}
