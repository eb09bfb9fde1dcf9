// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit linting.

use std::sync::Arc;

use rayon::prelude::*;

use crate::commit::CommitMessage;
use crate::config::{RuleConfig, RuleEntry};
use crate::error::{CclintError, ConfigError, Result};

use super::builtin::Rule;
use super::registry::RuleRegistry;
use super::validator::{aggregate, LintResult, RuleOutcome};

/// A configured rule resolved against the registry.
#[derive(Debug, Clone)]
struct BoundRule {
    name: String,
    entry: RuleEntry,
    rule: Arc<dyn Rule>,
}

/// Lints commit messages against a validated rule configuration.
///
/// Building a `Linter` is where configuration errors surface. Once built it
/// is immutable and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Linter {
    rules: Vec<BoundRule>,
}

impl Linter {
    /// Resolve and validate every enabled rule in `config`.
    pub fn new(config: &RuleConfig, registry: &RuleRegistry) -> Result<Self> {
        let mut rules = Vec::with_capacity(config.len());

        for (name, entry) in config.iter() {
            if !entry.is_enabled() {
                tracing::trace!("Skipping disabled rule {}", name);
                continue;
            }

            let rule = registry.resolve(name)?;
            rule.check_value(entry.value.as_ref()).map_err(|message| {
                CclintError::Config(ConfigError::InvalidValue {
                    rule: name.to_string(),
                    message,
                })
            })?;

            rules.push(BoundRule {
                name: name.to_string(),
                entry: entry.clone(),
                rule,
            });
        }

        tracing::debug!("Linter ready with {} active rules", rules.len());
        Ok(Self { rules })
    }

    /// Build against the built-in registry.
    pub fn with_builtin_rules(config: &RuleConfig) -> Result<Self> {
        Self::new(config, &RuleRegistry::with_builtin_rules())
    }

    /// Names of the active rules, in evaluation order.
    pub fn active_rules(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    /// Lint a raw commit message.
    pub fn lint(&self, text: &str) -> LintResult {
        let message = CommitMessage::parse(text);
        self.lint_message(&message).with_input(text)
    }

    /// Lint an already parsed message.
    ///
    /// Every active rule runs; a failure never stops later rules.
    pub fn lint_message(&self, message: &CommitMessage) -> LintResult {
        let outcomes = self
            .rules
            .iter()
            .map(|bound| {
                let eval = bound.rule.evaluate(
                    message,
                    bound.entry.applicability,
                    bound.entry.value.as_ref(),
                );
                tracing::trace!(
                    "Rule {} -> {}",
                    bound.name,
                    if eval.passed { "pass" } else { "fail" }
                );
                RuleOutcome {
                    rule: bound.name.clone(),
                    severity: bound.entry.severity,
                    passed: eval.passed,
                    message: format!("{}: {}", bound.name, eval.message),
                }
            })
            .collect();

        aggregate(outcomes).with_breaking(message.is_breaking())
    }

    /// Lint many messages in parallel. Output order matches input order.
    pub fn lint_batch<S>(&self, messages: &[S]) -> Vec<LintResult>
    where
        S: AsRef<str> + Sync,
    {
        tracing::debug!("Linting batch of {} messages", messages.len());
        messages
            .par_iter()
            .map(|text| self.lint(text.as_ref()))
            .collect()
    }
}

/// Lint a single message against `config` using the built-in rules.
///
/// Fails only when the configuration is unusable.
pub fn lint(text: &str, config: &RuleConfig) -> Result<LintResult> {
    Ok(Linter::with_builtin_rules(config)?.lint(text))
}
