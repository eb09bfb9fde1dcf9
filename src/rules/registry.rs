// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{CclintError, ConfigError, Result};

use super::builtin::{
    Bound, CaseRule, EmptyRule, EnumRule, Field, HeaderLength, HeaderTrim, Rule,
    SubjectExclamationMark, SubjectFullStop,
};

/// Mapping from rule name to implementation.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in rule.
    pub fn with_builtin_rules() -> Self {
        let mut registry = Self::new();
        registry.register("type-enum", Arc::new(EnumRule::new(Field::Type)));
        registry.register("scope-enum", Arc::new(EnumRule::new(Field::Scope)));
        registry.register("type-empty", Arc::new(EmptyRule::new(Field::Type)));
        registry.register("scope-empty", Arc::new(EmptyRule::new(Field::Scope)));
        registry.register("subject-empty", Arc::new(EmptyRule::new(Field::Subject)));
        registry.register("type-case", Arc::new(CaseRule::new(Field::Type)));
        registry.register("scope-case", Arc::new(CaseRule::new(Field::Scope)));
        registry.register("subject-case", Arc::new(CaseRule::new(Field::Subject)));
        registry.register("subject-full-stop", Arc::new(SubjectFullStop));
        registry.register(
            "subject-exclamation-mark",
            Arc::new(SubjectExclamationMark),
        );
        registry.register("header-max-length", Arc::new(HeaderLength::new(Bound::Max)));
        registry.register("header-min-length", Arc::new(HeaderLength::new(Bound::Min)));
        registry.register("header-trim", Arc::new(HeaderTrim));
        registry
    }

    /// Register a rule, returning any rule previously registered under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        rule: Arc<dyn Rule>,
    ) -> Option<Arc<dyn Rule>> {
        let name = name.into();
        tracing::trace!("Registering rule {}", name);
        self.rules.insert(name, rule)
    }

    /// Look up a rule by name.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Rule>> {
        self.rules.get(name).cloned().ok_or_else(|| {
            CclintError::Config(ConfigError::UnknownRule {
                name: name.to_string(),
            })
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::CommitMessage;
    use crate::config::{Applicability, RuleValue};
    use crate::rules::Evaluation;

    #[derive(Debug)]
    struct AlwaysFails;

    impl Rule for AlwaysFails {
        fn evaluate(
            &self,
            _message: &CommitMessage,
            _when: Applicability,
            _value: Option<&RuleValue>,
        ) -> Evaluation {
            Evaluation::fail("nope")
        }
    }

    #[test]
    fn test_builtin_rules_registered() {
        let registry = RuleRegistry::with_builtin_rules();
        assert!(registry.contains("type-enum"));
        assert!(registry.contains("scope-enum"));
        assert_eq!(registry.len(), 13);
        assert_eq!(registry.names().first(), Some(&"header-max-length"));
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        let err = registry.resolve("type-enum").unwrap_err();
        assert!(matches!(
            err,
            CclintError::Config(ConfigError::UnknownRule { ref name }) if name == "type-enum"
        ));
    }

    #[test]
    fn test_register_custom_rule() {
        let mut registry = RuleRegistry::with_builtin_rules();
        assert!(registry
            .register("always-fails", Arc::new(AlwaysFails))
            .is_none());
        let rule = registry.resolve("always-fails").unwrap();
        let msg = CommitMessage::parse("feat: x");
        assert!(!rule.evaluate(&msg, Applicability::Always, None).passed);

        // Re-registering replaces the previous implementation.
        assert!(registry
            .register("type-enum", Arc::new(AlwaysFails))
            .is_some());
    }
}
