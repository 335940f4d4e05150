// src/infrastructure/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{CONFIG_DIR_NAME, NOTES_DIR_NAME, NOTES_FILE_NAME};

/// TOML configuration for noteapp
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct StorageConfig {
    /// Notes file; empty means the per-user default location.
    #[serde(default)]
    pub path: String,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load `path` if given, else the default config file if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Using default config file");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Configured notes file, if one is set.
    pub fn notes_path(&self) -> Option<PathBuf> {
        let path = self.storage.path.trim();
        (!path.is_empty()).then(|| PathBuf::from(path))
    }
}

/// `<config_dir>/noteapp/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
}

/// `<home>/Documents/NoteApp.notes`
pub fn default_notes_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(NOTES_DIR_NAME).join(NOTES_FILE_NAME))
}

/// Pick the notes file: explicit flag, then config, then the default location.
pub fn resolve_notes_path(file: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = file {
        debug!(?path, "Using notes file from command line");
        return Ok(path);
    }
    if let Some(path) = config.notes_path() {
        debug!(?path, "Using notes file from config");
        return Ok(path);
    }
    default_notes_path()
}
