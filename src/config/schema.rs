// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Rule entries use the `[severity, applicability, value]` array shape:
//!
//! ```toml
//! [rules]
//! type-enum = [2, "always", ["feat", "fix"]]
//! subject-empty = [2, "never"]
//! body-max-line-length = [0]
//! ```
//!
//! Arrays are heterogeneous, so files are first read into a raw form and
//! then converted into typed [`RuleEntry`] values. Everything that can be
//! checked without knowing which rules exist is checked here.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// The main configuration structure for cclint.
#[derive(Debug, Clone, PartialEq)]
pub struct CclintConfig {
    /// Rule configuration, in file order.
    pub rules: RuleConfig,

    /// Treat failing warnings as errors when deciding the exit status.
    pub strict: bool,
}

impl Default for CclintConfig {
    fn default() -> Self {
        Self {
            rules: super::default::conventional_rules(),
            strict: false,
        }
    }
}

impl CclintConfig {
    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// How strictly a rule is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Level 0: the rule is not evaluated.
    Disabled,
    /// Level 1: failures are reported but do not invalidate the message.
    Warning,
    /// Level 2: failures invalidate the message.
    Error,
}

impl Severity {
    /// Map a numeric level to a severity.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Severity::Disabled),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Disabled => "disabled",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// Whether a rule's condition must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl Applicability {
    /// Apply this applicability to a raw condition.
    pub fn expect(self, condition: bool) -> bool {
        match self {
            Applicability::Always => condition,
            Applicability::Never => !condition,
        }
    }
}

impl FromStr for Applicability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Applicability::Always),
            "never" => Ok(Applicability::Never),
            other => Err(format!("expected \"always\" or \"never\", got \"{}\"", other)),
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Applicability::Always => f.write_str("always"),
            Applicability::Never => f.write_str("never"),
        }
    }
}

/// A rule-specific configured value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleValue {
    Number(i64),
    Text(String),
    /// Ordered, de-duplicated, never empty.
    List(Vec<String>),
}

impl RuleValue {
    /// Build a list value, dropping duplicates but keeping first-seen order.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for item in items {
            let item = item.into();
            if !out.contains(&item) {
                out.push(item);
            }
        }
        RuleValue::List(out)
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            RuleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            RuleValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Text or list, as a list of strings.
    pub fn as_strings(&self) -> Option<Vec<&str>> {
        match self {
            RuleValue::Text(s) => Some(vec![s.as_str()]),
            RuleValue::List(items) => Some(items.iter().map(String::as_str).collect()),
            RuleValue::Number(_) => None,
        }
    }
}

/// Configuration for a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub severity: Severity,
    pub applicability: Applicability,
    pub value: Option<RuleValue>,
}

impl RuleEntry {
    pub fn new(severity: Severity, applicability: Applicability) -> Self {
        Self {
            severity,
            applicability,
            value: None,
        }
    }

    pub fn with_value(mut self, value: RuleValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Whether the rule should be evaluated at all.
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Disabled
    }

    /// Convert a raw `[severity, applicability, value]` array.
    fn from_raw(rule: &str, items: Vec<RawItem>) -> Result<Self, ConfigError> {
        if items.len() > 3 {
            return Err(ConfigError::InvalidValue {
                rule: rule.to_string(),
                message: format!("expected at most 3 elements, got {}", items.len()),
            });
        }
        let mut items = items.into_iter();

        let severity = match items.next() {
            Some(RawItem::Int(level)) => {
                Severity::from_level(level).ok_or_else(|| ConfigError::InvalidSeverity {
                    rule: rule.to_string(),
                    message: format!("expected 0, 1 or 2, got {}", level),
                })?
            }
            Some(_) => {
                return Err(ConfigError::InvalidSeverity {
                    rule: rule.to_string(),
                    message: "severity must be a number".to_string(),
                })
            }
            None => {
                return Err(ConfigError::InvalidSeverity {
                    rule: rule.to_string(),
                    message: "missing severity".to_string(),
                })
            }
        };

        let applicability = match items.next() {
            Some(RawItem::Text(s)) => {
                s.parse::<Applicability>()
                    .map_err(|message| ConfigError::InvalidApplicability {
                        rule: rule.to_string(),
                        message,
                    })?
            }
            Some(_) => {
                return Err(ConfigError::InvalidApplicability {
                    rule: rule.to_string(),
                    message: "applicability must be a string".to_string(),
                })
            }
            None => Applicability::default(),
        };

        let value = match items.next() {
            Some(RawItem::Int(n)) => Some(RuleValue::Number(n)),
            Some(RawItem::Text(s)) => Some(RuleValue::Text(s)),
            Some(RawItem::List(list)) => {
                if list.is_empty() {
                    return Err(ConfigError::EmptySet {
                        rule: rule.to_string(),
                    });
                }
                Some(RuleValue::list(list))
            }
            None => None,
        };

        Ok(Self {
            severity,
            applicability,
            value,
        })
    }
}

/// Ordered mapping from rule name to its configuration.
///
/// Iteration follows insertion order, which is also the order outcomes are
/// reported in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleConfig {
    entries: Vec<(String, RuleEntry)>,
}

impl RuleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a rule entry.
    ///
    /// Replacing keeps the rule's original position. An empty list value is
    /// rejected here so it can never reach evaluation.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        entry: RuleEntry,
    ) -> Result<(), ConfigError> {
        let name = name.into();
        if matches!(&entry.value, Some(RuleValue::List(items)) if items.is_empty()) {
            return Err(ConfigError::EmptySet { rule: name });
        }
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((name, entry)),
        }
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, entry: RuleEntry) -> Result<Self, ConfigError> {
        self.insert(name, entry)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&RuleEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleEntry)> {
        self.entries.iter().map(|(n, e)| (n.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One element of a raw rule array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawItem {
    Int(i64),
    Text(String),
    List(Vec<String>),
}

/// Rule table as written in the file, order preserved.
#[derive(Debug, Default)]
struct RawRules(Vec<(String, Vec<RawItem>)>);

impl<'de> Deserialize<'de> for RawRules {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawRulesVisitor;

        impl<'de> Visitor<'de> for RawRulesVisitor {
            type Value = RawRules;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of rule names to [severity, applicability, value] arrays")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((name, items)) = map.next_entry::<String, Vec<RawItem>>()? {
                    entries.push((name, items));
                }
                Ok(RawRules(entries))
            }
        }

        deserializer.deserialize_map(RawRulesVisitor)
    }
}

/// Configuration file as written, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct RawConfig {
    rules: RawRules,
    strict: bool,
}

impl RawConfig {
    /// Validate and convert into a typed configuration.
    pub(crate) fn into_config(self) -> Result<CclintConfig, ConfigError> {
        let mut rules = RuleConfig::new();
        for (name, items) in self.rules.0 {
            let entry = RuleEntry::from_raw(&name, items)?;
            rules.insert(name, entry)?;
        }
        Ok(CclintConfig {
            rules,
            strict: self.strict,
        })
    }
}
