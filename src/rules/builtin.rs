// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Rules only ever look at the header. Each one is a pure function of the
//! parsed message, the configured applicability and the configured value.

use crate::commit::CommitMessage;
use crate::config::{Applicability, RuleValue};

use super::case::Case;

/// What a rule reports after evaluating a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub passed: bool,
    pub message: String,
}

impl Evaluation {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }

    fn from_check(passed: bool, message: impl Into<String>) -> Self {
        Self {
            passed,
            message: message.into(),
        }
    }
}

/// Trait for lint rules.
///
/// Implementations must not keep state between calls; the linter may call
/// `evaluate` from several threads at once.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Check that a configured value is usable by this rule.
    ///
    /// Called once when the linter is built, before any message is seen.
    fn check_value(&self, value: Option<&RuleValue>) -> Result<(), String> {
        match value {
            None => Ok(()),
            Some(_) => Err("this rule takes no value".to_string()),
        }
    }

    /// Evaluate the rule against a parsed message.
    fn evaluate(
        &self,
        message: &CommitMessage,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> Evaluation;
}

/// Header field a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Scope,
    Subject,
}

impl Field {
    pub fn get<'a>(&self, message: &'a CommitMessage) -> Option<&'a str> {
        match self {
            Field::Type => message.commit_type(),
            Field::Scope => message.scope(),
            Field::Subject => message.subject(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Type => "type",
            Field::Scope => "scope",
            Field::Subject => "subject",
        }
    }
}

/// `type-enum` / `scope-enum`: membership in a configured set.
#[derive(Debug, Clone, Copy)]
pub struct EnumRule {
    field: Field,
}

impl EnumRule {
    pub fn new(field: Field) -> Self {
        Self { field }
    }
}

impl Rule for EnumRule {
    fn check_value(&self, value: Option<&RuleValue>) -> Result<(), String> {
        match value {
            Some(RuleValue::List(items)) if !items.is_empty() => Ok(()),
            Some(RuleValue::List(_)) => Err("allowed set must not be empty".to_string()),
            Some(_) => Err("expected a list of strings".to_string()),
            None => Err("missing list of values".to_string()),
        }
    }

    fn evaluate(
        &self,
        message: &CommitMessage,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> Evaluation {
        let allowed = value.and_then(RuleValue::as_list).unwrap_or(&[]);
        let listed = allowed.join(", ");
        let label = self.field.label();

        match (self.field.get(message), when) {
            (None, Applicability::Always) => Evaluation::fail(format!(
                "missing {}; expected one of [{}]",
                label, listed
            )),
            (None, Applicability::Never) => Evaluation::pass(format!("no {} to check", label)),
            (Some(actual), when) => {
                let member = allowed.iter().any(|a| a == actual);
                if when.expect(member) {
                    Evaluation::pass(format!("{} '{}' is accepted", label, actual))
                } else if when == Applicability::Always {
                    Evaluation::fail(format!(
                        "{} '{}' is not one of [{}]",
                        label, actual, listed
                    ))
                } else {
                    Evaluation::fail(format!(
                        "{} '{}' must not be one of [{}]",
                        label, actual, listed
                    ))
                }
            }
        }
    }
}

/// `type-empty` / `scope-empty` / `subject-empty`.
///
/// With `never`, the field must be present and non-empty.
#[derive(Debug, Clone, Copy)]
pub struct EmptyRule {
    field: Field,
}

impl EmptyRule {
    pub fn new(field: Field) -> Self {
        Self { field }
    }
}

impl Rule for EmptyRule {
    fn evaluate(
        &self,
        message: &CommitMessage,
        when: Applicability,
        _value: Option<&RuleValue>,
    ) -> Evaluation {
        let empty = self.field.get(message).map_or(true, str::is_empty);
        let label = self.field.label();
        let passed = when.expect(empty);
        let text = match (passed, when) {
            (true, _) => format!("{} emptiness is as expected", label),
            (false, Applicability::Never) => format!("{} may not be empty", label),
            (false, Applicability::Always) => format!("{} must be empty", label),
        };
        Evaluation::from_check(passed, text)
    }
}

/// `type-case` / `scope-case` / `subject-case`.
#[derive(Debug, Clone, Copy)]
pub struct CaseRule {
    field: Field,
}

impl CaseRule {
    pub fn new(field: Field) -> Self {
        Self { field }
    }

    fn cases(value: Option<&RuleValue>) -> Vec<Case> {
        value
            .and_then(RuleValue::as_strings)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|name| name.parse().ok())
            .collect()
    }
}

impl Rule for CaseRule {
    fn check_value(&self, value: Option<&RuleValue>) -> Result<(), String> {
        let names = value
            .and_then(RuleValue::as_strings)
            .ok_or_else(|| "expected a case name or a list of case names".to_string())?;
        for name in names {
            name.parse::<Case>()?;
        }
        Ok(())
    }

    fn evaluate(
        &self,
        message: &CommitMessage,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> Evaluation {
        let label = self.field.label();
        let actual = match self.field.get(message) {
            Some(actual) if !actual.is_empty() => actual,
            _ => return Evaluation::pass(format!("no {} to check", label)),
        };

        let cases = Self::cases(value);
        let listed = cases
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let matched = cases.iter().any(|c| c.matches(actual));

        match when {
            Applicability::Always if matched => {
                Evaluation::pass(format!("{} '{}' has an accepted case", label, actual))
            }
            Applicability::Always => Evaluation::fail(format!(
                "{} '{}' must be in one of [{}]",
                label, actual, listed
            )),
            Applicability::Never if !matched => {
                Evaluation::pass(format!("{} '{}' has an accepted case", label, actual))
            }
            Applicability::Never => Evaluation::fail(format!(
                "{} '{}' must not be in any of [{}]",
                label, actual, listed
            )),
        }
    }
}

/// `subject-full-stop`: trailing stop string on the subject.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectFullStop;

impl Rule for SubjectFullStop {
    fn check_value(&self, value: Option<&RuleValue>) -> Result<(), String> {
        match value {
            None => Ok(()),
            Some(RuleValue::Text(s)) if !s.is_empty() => Ok(()),
            Some(_) => Err("expected a non-empty string".to_string()),
        }
    }

    fn evaluate(
        &self,
        message: &CommitMessage,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> Evaluation {
        let stop = value.and_then(RuleValue::as_text).unwrap_or(".");
        let subject = match message.subject() {
            Some(subject) if !subject.is_empty() => subject,
            _ => return Evaluation::pass("no subject to check"),
        };

        let ends = subject.ends_with(stop);
        let passed = when.expect(ends);
        let text = match (passed, when) {
            (true, _) => "subject ending is as expected".to_string(),
            (false, Applicability::Never) => format!("subject may not end with '{}'", stop),
            (false, Applicability::Always) => format!("subject must end with '{}'", stop),
        };
        Evaluation::from_check(passed, text)
    }
}

/// Which side of a length bound a [`HeaderLength`] rule enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Max,
    Min,
}

/// `header-max-length` / `header-min-length`, counted in characters.
#[derive(Debug, Clone, Copy)]
pub struct HeaderLength {
    bound: Bound,
}

impl HeaderLength {
    pub fn new(bound: Bound) -> Self {
        Self { bound }
    }
}

impl Rule for HeaderLength {
    fn check_value(&self, value: Option<&RuleValue>) -> Result<(), String> {
        match value {
            Some(RuleValue::Number(n)) if *n >= 0 => Ok(()),
            Some(RuleValue::Number(n)) => Err(format!("length must not be negative, got {}", n)),
            _ => Err("expected a length".to_string()),
        }
    }

    fn evaluate(
        &self,
        message: &CommitMessage,
        when: Applicability,
        value: Option<&RuleValue>,
    ) -> Evaluation {
        let limit = value
            .and_then(RuleValue::as_number)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        let len = message.header_len();

        let within = match self.bound {
            Bound::Max => len <= limit,
            Bound::Min => len >= limit,
        };
        let passed = when.expect(within);
        let text = match (passed, when, self.bound) {
            (true, _, _) => format!("header length {} is acceptable", len),
            (false, Applicability::Always, Bound::Max) => {
                format!("header is {} characters, max is {}", len, limit)
            }
            (false, Applicability::Always, Bound::Min) => {
                format!("header is {} characters, min is {}", len, limit)
            }
            (false, Applicability::Never, Bound::Max) => {
                format!("header is {} characters, must be longer than {}", len, limit)
            }
            (false, Applicability::Never, Bound::Min) => {
                format!("header is {} characters, must be shorter than {}", len, limit)
            }
        };
        Evaluation::from_check(passed, text)
    }
}

/// `header-trim`: no leading or trailing whitespace on the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderTrim;

impl Rule for HeaderTrim {
    fn evaluate(
        &self,
        message: &CommitMessage,
        when: Applicability,
        _value: Option<&RuleValue>,
    ) -> Evaluation {
        let header = message.header();
        let trimmed = header.trim() == header;
        let passed = when.expect(trimmed);
        let text = match (passed, when) {
            (true, _) => "header whitespace is as expected".to_string(),
            (false, Applicability::Always) => {
                "header must not have leading or trailing whitespace".to_string()
            }
            (false, Applicability::Never) => {
                "header must have leading or trailing whitespace".to_string()
            }
        };
        Evaluation::from_check(passed, text)
    }
}

/// `subject-exclamation-mark`: `!` right before the header colon.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectExclamationMark;

impl Rule for SubjectExclamationMark {
    fn evaluate(
        &self,
        message: &CommitMessage,
        when: Applicability,
        _value: Option<&RuleValue>,
    ) -> Evaluation {
        let marked = message.header().contains("!:");
        let passed = when.expect(marked);
        let text = match (passed, when) {
            (true, _) => "exclamation mark is as expected".to_string(),
            (false, Applicability::Never) => {
                "header may not have an exclamation mark before the colon".to_string()
            }
            (false, Applicability::Always) => {
                "header must have an exclamation mark before the colon".to_string()
            }
        };
        Evaluation::from_check(passed, text)
    }
}
