//! CLI configuration
//!
//! Stored in ~/.config/dnabag/config.json. Every field is optional in the
//! file; missing fields take the defaults below.

use crate::model::{parse_targets, SymbolSet};
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// How command results are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Settings shared by all commands
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Symbols counted as targets by `report`
    pub targets: Vec<String>,
    /// Output format when `--format` is not given
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            targets: vec!["C".to_string(), "G".to_string()],
            format: OutputFormat::Json,
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dnabag").join("config.json"))
    }

    /// Load from `path`, or from the default location when present
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })?;

        config.target_set()?;
        Ok(config)
    }

    /// Configured targets as a symbol set
    pub fn target_set(&self) -> Result<SymbolSet> {
        parse_targets(&self.targets)
    }
}
