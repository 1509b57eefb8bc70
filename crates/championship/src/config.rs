//! Shell configuration, read from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "championship.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt shown before each command
    pub prompt: String,
    /// Highlight simulated results with ANSI colors
    pub color: bool,
    /// Print the table again after every push/pop
    pub auto_print: bool,
    /// Width of the name column
    pub name_width: usize,
    /// Width of each result column
    pub cell_width: usize,
    /// Default log filter (overridden by `-v` and `RUST_LOG`)
    pub log_level: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "ccs> ".to_string(),
            color: std::io::stdout().is_terminal(),
            auto_print: true,
            name_width: 15,
            cell_width: 8,
            log_level: "warn".to_string(),
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid shell config")
    }

    /// Config file to read: the explicit path, or `championship.toml` if it
    /// exists in the working directory
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                fallback.exists().then_some(fallback)
            }
        }
    }

    /// Read the file picked by [`ShellConfig::locate`]; no file means defaults.
    ///
    /// Runs before the logger is up, so this does not log.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to load config {}", path.display()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
