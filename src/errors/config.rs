// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading application config and session scripts.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for the expected shape
    #[error("failed to parse YAML in '{path}': {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The file is not valid TOML for the expected shape
    #[error("failed to parse TOML in '{path}': {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The file parsed but holds values we refuse to run with
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
