// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file, then
//! `CITYROUTE_*` environment variables. Command-line flags are applied on
//! top by the individual commands.

use crate::loader::ParseMode;
use crate::render::DEFAULT_SEPARATOR;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "CITYROUTE";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Treat edges as one-way
    pub directed: bool,
    /// Abort loading on malformed records instead of skipping them
    pub strict: bool,
    /// Placed between cities when printing a route
    pub separator: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directed: false,
            strict: true,
            separator: DEFAULT_SEPARATOR.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse mode implied by `strict`
    #[must_use]
    pub fn parse_mode(&self) -> ParseMode {
        ParseMode::from_strict(self.strict)
    }
}

/// Default location of the config file, if the platform has one
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "hyperpolymath", "cityroute")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration.
///
/// An explicit `path` must exist; the default location is optional.
///
/// # Errors
///
/// Fails if an explicit file is missing, or any source cannot be parsed.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let mut builder = config::Config::builder();

    match path {
        Some(path) => {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        None => {
            if let Some(default) = default_path() {
                builder = builder.add_source(config::File::from(default).required(false));
            }
        }
    }

    let settings = builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()
        .context("Failed to read configuration")?;

    settings
        .try_deserialize()
        .context("Invalid configuration")
}

/// Render the configuration as TOML
///
/// # Errors
///
/// Fails only if serialization fails.
pub fn to_toml(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize configuration")
}
