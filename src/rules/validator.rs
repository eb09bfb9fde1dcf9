// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint outcome types and aggregation.

use serde::Serialize;

use crate::config::Severity;

/// The outcome of evaluating one configured rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    /// Rule name as configured.
    pub rule: String,
    /// Configured severity.
    pub severity: Severity,
    /// Whether the rule's condition held.
    pub passed: bool,
    /// Human-readable message, prefixed with the rule name.
    pub message: String,
}

impl RuleOutcome {
    /// Whether this outcome makes the message invalid.
    pub fn is_error(&self) -> bool {
        !self.passed && self.severity == Severity::Error
    }

    /// Whether this outcome is a reported, non-fatal failure.
    pub fn is_warning(&self) -> bool {
        !self.passed && self.severity == Severity::Warning
    }
}

/// Result of linting one commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintResult {
    /// The linted input, if recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Commit SHA when linting an existing commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_sha: Option<String>,
    /// Whether the message declares a breaking change.
    pub breaking: bool,
    /// Outcomes in configuration order.
    pub outcomes: Vec<RuleOutcome>,
    /// Derived verdict, kept in sync with `outcomes`.
    valid: bool,
}

/// Combine outcomes into a result.
pub fn aggregate(outcomes: Vec<RuleOutcome>) -> LintResult {
    let valid = outcomes.iter().all(|o| !o.is_error());
    LintResult {
        input: None,
        commit_sha: None,
        breaking: false,
        outcomes,
        valid,
    }
}

impl LintResult {
    /// Attach the linted input.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Attach a commit SHA.
    pub fn with_commit(mut self, sha: impl Into<String>) -> Self {
        self.commit_sha = Some(sha.into());
        self
    }

    /// Mark the result as a breaking change.
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// True iff no error-severity outcome failed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Failed error-severity outcomes.
    pub fn errors(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| o.is_error())
    }

    /// Failed warning-severity outcomes.
    pub fn warnings(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| o.is_warning())
    }

    /// First line of the input, if any.
    pub fn header(&self) -> &str {
        self.input
            .as_deref()
            .and_then(|s| s.lines().next())
            .unwrap_or("")
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        let errors = self.errors().count();
        let warnings = self.warnings().count();
        if self.is_valid() {
            if warnings == 0 {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", warnings)
            }
        } else {
            format!("Invalid ({} errors, {} warnings)", errors, warnings)
        }
    }
}
