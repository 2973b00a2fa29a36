use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::location::LocationKey;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_location = "lindsey"
/// api_base_url = "https://api.open-meteo.com"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Registry key shown when no location is given, e.g. "bowmanville".
    pub default_location: Option<String>,

    /// Override for the Open-Meteo host, mostly useful for self-hosted instances.
    pub api_base_url: Option<String>,
}

impl Config {
    /// The configured default location, or the registry default when unset.
    pub fn default_location_key(&self) -> Result<LocationKey> {
        match self.default_location.as_deref() {
            Some(s) => LocationKey::try_from(s).context(
                "Invalid default_location in config.\n\
                 Hint: run `forecast configure` to pick one of the supported locations.",
            ),
            None => Ok(LocationKey::default()),
        }
    }

    pub fn set_default_location(&mut self, key: LocationKey) {
        self.default_location = Some(key.as_str().to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
