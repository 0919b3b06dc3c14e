//! CLI settings file (`avgprice.toml`).
//!
//! ```toml
//! format = "json"
//! parallel = false
//! ```
//!
//! Resolution: an explicit `--config` path must exist; otherwise
//! `./avgprice.toml` is used when present; otherwise defaults apply.
//! Command-line flags override whatever the file says.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "avgprice.toml";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub format: OutputFormat,
    /// Fan batch evaluation out over the rayon pool.
    pub parallel: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            parallel: true,
        }
    }
}

impl CliConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse config TOML")
    }

    /// Resolve settings from an explicit path, the working directory, or
    /// defaults, in that order.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let local = working_dir.join(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::from_file(&local);
        }
        Ok(Self::default())
    }
}
