// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Only reads history: commit messages for a revision or a range.

mod repo;

pub use repo::{get_commit_range, Repository};
