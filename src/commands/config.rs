// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - inspect the effective configuration

use super::Output;
use crate::config;
use anyhow::{Context, Result};
use std::path::Path;

/// Run config command.
///
/// The file is only read for `show`/`get`, so `path` still works when the
/// configuration is broken.
pub fn run(action: &str, explicit: Option<&Path>, output: Output) -> Result<()> {
    match action {
        "show" | "get" => {
            let config = config::load(explicit)?;
            if output.json {
                let json = serde_json::to_string_pretty(&config)
                    .context("Failed to serialize configuration")?;
                println!("{json}");
            } else {
                print!("{}", config::to_toml(&config)?);
            }
        }

        "path" => match explicit.map(Path::to_path_buf).or_else(config::default_path) {
            Some(path) => println!("{}", path.display()),
            None => anyhow::bail!("No configuration directory on this platform"),
        },

        other => {
            anyhow::bail!("Unknown action: {}. Valid: show, get, path", other);
        }
    }

    Ok(())
}
