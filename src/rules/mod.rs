// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module.
//!
//! Parsing happens once per message; each configured rule is then evaluated
//! independently and the outcomes are aggregated into a [`LintResult`].

mod builtin;
pub mod case;
mod engine;
mod registry;
mod validator;

pub use builtin::{
    Bound, CaseRule, EmptyRule, EnumRule, Evaluation, Field, HeaderLength, HeaderTrim, Rule,
    SubjectExclamationMark, SubjectFullStop,
};
pub use engine::{lint, Linter};
pub use registry::RuleRegistry;
pub use validator::{aggregate, LintResult, RuleOutcome};
