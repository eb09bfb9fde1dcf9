// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cclint - Conventional Commit Header Linter
//!
//! Parses the header of a commit message and evaluates a configurable set of
//! rules against it, producing pass/warn/fail outcomes.
//!
//! # Features
//!
//! - **Total Header Parser**: never fails; malformed headers surface as failed rules
//! - **Rule Registry**: built-in conventional rules, open to custom rules
//! - **Ordered Outcomes**: results follow configuration order
//! - **Load-time Validation**: unknown rules and empty enum sets are rejected up front
//! - **Batch Linting**: lint git history in parallel
//!
//! # Example
//!
//! ```
//! use cclint::config::{Applicability, RuleConfig, RuleEntry, RuleValue, Severity};
//! use cclint::rules::Linter;
//!
//! let config = RuleConfig::new()
//!     .with(
//!         "type-enum",
//!         RuleEntry::new(Severity::Error, Applicability::Always)
//!             .with_value(RuleValue::list(["feat", "fix"])),
//!     )
//!     .unwrap();
//!
//! let linter = Linter::with_builtin_rules(&config).unwrap();
//! assert!(linter.lint("feat(cli): add init command").is_valid());
//! assert!(!linter.lint("oops: bad type").is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;

// Re-exports for convenience
pub use commit::CommitMessage;
pub use config::CclintConfig;
pub use error::{CclintError, Result};
pub use rules::{lint, LintResult, Linter, RuleRegistry};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cclint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match GIT_SHA {
            Some(sha) => format!("cclint {} ({})", VERSION, &sha[..7.min(sha.len())]),
            None => format!("cclint {}", VERSION),
        }
    }
}
