use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::profile::presets::Card;

const CONFIG_FILE_NAME: &str = "paramscan.toml";

/// Optional per-project configuration; every section falls back to its
/// default, so a missing or partial file is fine. Command-line flags
/// always win over config values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub profile: ProfileSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileSection {
    /// Default card preset for profile metadata generation.
    pub card: Option<Card>,
    /// Default profile version override.
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Base directory prepended to relative output paths.
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Load `paramscan.toml` from the working directory; an absent file
    /// yields the defaults.
    pub fn load_or_default() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config file: {}", path.display()))
    }

    /// Resolve a requested output path against the configured directory.
    pub fn resolve_output(&self, requested: &Path) -> PathBuf {
        match &self.output.directory {
            Some(directory) if requested.is_relative() => directory.join(requested),
            _ => requested.to_path_buf(),
        }
    }
}

#[cfg(test)]
#[path = "test_config.rs"]
mod tests;
