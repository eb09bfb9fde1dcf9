// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::{Applicability, RuleConfig, RuleEntry, RuleValue, Severity};

/// Allowed commit types for the default preset.
pub const DEFAULT_TYPES: &[&str] = &[
    "fix", "build", "revert", "wip", "feat", "chore", "ci", "docs", "style", "refactor", "perf",
    "test", "instr",
];

/// Allowed scopes for the default preset.
pub const DEFAULT_SCOPES: &[&str] = &[
    "blueprint",
    "build-engine",
    "common",
    "runtime-core",
    "runtime-go",
    "runtime-java",
    "runtime-nodejs",
    "runtime-python",
    "runtime-rust",
    "api",
    "cli",
    "tool-releaser",
    "tool-test-runner",
    "validator-go",
    "validator-java",
    "validator-nodejs",
    "validator-python",
    "validator-rust",
    "templates-go",
    "templates-java",
    "templates-nodejs",
    "templates-python",
    "templates-rust",
];

/// The conventional header rules plus the default type and scope lists.
pub fn conventional_rules() -> RuleConfig {
    use Applicability::{Always, Never};
    use Severity::Error;

    let entries = [
        ("header-max-length", RuleEntry::new(Error, Always).with_value(RuleValue::Number(100))),
        ("header-trim", RuleEntry::new(Error, Always)),
        (
            "subject-case",
            RuleEntry::new(Error, Never).with_value(RuleValue::list([
                "sentence-case",
                "start-case",
                "pascal-case",
                "upper-case",
            ])),
        ),
        ("subject-empty", RuleEntry::new(Error, Never)),
        (
            "subject-full-stop",
            RuleEntry::new(Error, Never).with_value(RuleValue::Text(".".to_string())),
        ),
        (
            "type-case",
            RuleEntry::new(Error, Always).with_value(RuleValue::Text("lower-case".to_string())),
        ),
        ("type-empty", RuleEntry::new(Error, Never)),
        (
            "type-enum",
            RuleEntry::new(Error, Always).with_value(RuleValue::list(DEFAULT_TYPES.iter().copied())),
        ),
        (
            "scope-enum",
            RuleEntry::new(Error, Always)
                .with_value(RuleValue::list(DEFAULT_SCOPES.iter().copied())),
        ),
    ];

    let mut rules = RuleConfig::new();
    for (name, entry) in entries {
        // Every preset value is a non-empty list or a scalar.
        if let Err(e) = rules.insert(name, entry) {
            tracing::warn!("Skipping preset rule {}: {}", name, e);
        }
    }
    rules
}

/// Generate an example configuration file equivalent to the default preset.
pub fn example_config() -> &'static str {
    r#"# cclint configuration
# Entries are [severity, applicability, value]
# severity: 0 = disabled, 1 = warning, 2 = error

strict = false

[rules]
header-max-length = [2, "always", 100]
header-trim = [2, "always"]
subject-case = [2, "never", ["sentence-case", "start-case", "pascal-case", "upper-case"]]
subject-empty = [2, "never"]
subject-full-stop = [2, "never", "."]
type-case = [2, "always", "lower-case"]
type-empty = [2, "never"]
type-enum = [2, "always", [
    "fix",
    "build",
    "revert",
    "wip",
    "feat",
    "chore",
    "ci",
    "docs",
    "style",
    "refactor",
    "perf",
    "test",
    "instr",
]]
scope-enum = [2, "always", [
    "blueprint",
    "build-engine",
    "common",
    "runtime-core",
    "runtime-go",
    "runtime-java",
    "runtime-nodejs",
    "runtime-python",
    "runtime-rust",
    "api",
    "cli",
    "tool-releaser",
    "tool-test-runner",
    "validator-go",
    "validator-java",
    "validator-nodejs",
    "validator-python",
    "validator-rust",
    "templates-go",
    "templates-java",
    "templates-nodejs",
    "templates-python",
    "templates-rust",
]]
"#
}
