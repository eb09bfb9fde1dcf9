// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for cclint.
//!
//! This module handles command-line argument parsing, command dispatch and
//! rendering of lint results.

pub mod args;
mod dispatch;
pub mod report;

pub use args::{Cli, Commands};
pub use dispatch::run;
