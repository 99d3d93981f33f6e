//! Configuration Management
//!
//! Optional defaults read from `<config_dir>/tagscan/config.json`.
//! Command-line flags always win over the file.

use crate::output::OutputFormat;
use crate::resource::RecordPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Abort on the first unclassifiable resource
    #[serde(default)]
    pub strict: bool,
    /// Add the short ARN column to table output
    #[serde(default)]
    pub show_arn: bool,
    /// Default output format
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tagscan").join("config.json"))
    }

    /// Load configuration from disk, falling back to defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid config {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Could not read config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Get effective record policy (CLI > config > default)
    pub fn effective_policy(&self, cli_strict: bool) -> RecordPolicy {
        if cli_strict || self.strict {
            RecordPolicy::Abort
        } else {
            RecordPolicy::Skip
        }
    }

    /// Get effective output format (CLI > config > default)
    pub fn effective_format(&self, cli_format: Option<OutputFormat>) -> OutputFormat {
        cli_format.or(self.format).unwrap_or_default()
    }

    /// Get effective ARN column setting (CLI > config > default)
    pub fn effective_show_arn(&self, cli_show_arn: bool) -> bool {
        cli_show_arn || self.show_arn
    }
}
