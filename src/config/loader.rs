// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::consts::{
    DEFAULT_ALLOWED_EXTENSION, DEFAULT_DOWNLOAD_PREFIX, DEFAULT_LOG_FILTER, DEFAULT_PREVIEW_LINES,
    DEFAULT_TIMESTAMP_FORMAT,
};
use crate::errors::ConfigError;
use crate::session::Mode;

/// Application configuration.
///
/// Every field is optional in the file; missing fields take the built-in
/// defaults from [`crate::config::consts`].
///
/// # Example
/// ```yaml
/// preview_lines: 20
/// download_prefix: "edited_"
/// allowed_extension: "txt"
/// timestamp_format: "[Saved on: %Y-%m-%d %H:%M:%S]"
/// default_mode: read
/// log_filter: "text_helper=info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub preview_lines: usize,
    pub download_prefix: String,
    pub allowed_extension: String,
    pub timestamp_format: String,
    pub default_mode: Mode,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preview_lines: DEFAULT_PREVIEW_LINES,
            download_prefix: DEFAULT_DOWNLOAD_PREFIX.to_string(),
            allowed_extension: DEFAULT_ALLOWED_EXTENSION.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            default_mode: Mode::Read,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// The allowed extension without any leading dot
    pub fn extension(&self) -> &str {
        self.allowed_extension.trim_start_matches('.')
    }

    /// Reject values that would make the UI unusable or panic at render time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preview_lines == 0 {
            return Err(ConfigError::Invalid(
                "preview_lines must be at least 1".to_string(),
            ));
        }
        if self.extension().is_empty() {
            return Err(ConfigError::Invalid(
                "allowed_extension must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Invalid(format!(
                "timestamp_format '{}' is not a valid strftime format",
                self.timestamp_format
            )));
        }
        Ok(())
    }
}

/// Load a config file; `.toml` files are parsed as TOML, anything else as YAML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    if is_toml {
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load a config file and validate it.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let cfg = load_config(path)?;
    cfg.validate()?;
    Ok(cfg)
}
