// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use planner_core::APP_NAME;
use tokio::fs;

use crate::arg::OutputFormat;

const PLANNER_CONFIG_ENV: &str = "PLANNER_CONFIG";

/// Loads the configuration.
///
/// An explicit path or `$PLANNER_CONFIG` must point to a readable file. The
/// default location is optional: if nothing is there, defaults are used.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(PLANNER_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = match get_config_dir() {
            Ok(dir) => dir.join(format!("{APP_NAME}/config.toml")),
            Err(e) => {
                tracing::warn!("{e}, using default config");
                return Ok(Config::default());
            }
        };
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using default config");
            return Ok(Config::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

/// Configuration for the planner shell.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output format used when a command does not ask for one.
    pub output_format: OutputFormat,

    /// Show event times on a 12-hour clock.
    pub hour12: bool,

    /// Prompt shown before each line when reading from a terminal.
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            hour12: true,
            prompt: "> ".to_string(),
        }
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| format!("Failed to parse config: {e}").into())
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
