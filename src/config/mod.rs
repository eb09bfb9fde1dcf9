// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cclint.
//!
//! This module handles loading and validating rule configuration from TOML
//! or JSON files, and provides the built-in conventional preset.

pub mod default;
mod loader;
mod schema;

pub use default::{conventional_rules, example_config};
pub use loader::{load_config_from, parse_config, ConfigFormat};
pub use schema::*;
