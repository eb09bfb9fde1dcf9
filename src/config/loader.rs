// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.
//!
//! The path is always given explicitly; there is no directory search.

use crate::error::{CclintError, ConfigError, Result};
use std::path::Path;

use super::schema::{CclintConfig, RawConfig};

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension, defaulting to TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CclintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CclintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CclintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content, ConfigFormat::from_path(path))
}

/// Parse and validate configuration from a string.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<CclintConfig> {
    let raw: RawConfig = match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| {
            CclintError::Config(ConfigError::ParseError {
                message: format!("Failed to parse TOML: {}", e),
            })
        })?,
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| {
            CclintError::Config(ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
            })
        })?,
    };

    let config = raw.into_config()?;
    tracing::debug!("Loaded {} rule entries", config.rules.len());
    Ok(config)
}
