//! Configuration management for txa

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A config value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("service.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("service.timeout_secs must be greater than 0")]
    ZeroTimeout,

    #[error("analysis.min_text_length must be greater than 0")]
    ZeroMinLength,

    #[error("export.file_name must not be empty")]
    EmptyFileName,
}

impl Config {
    /// Get the config file path (~/.config/txa/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/txa)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.service.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.service.base_url.clone()));
        }
        if self.service.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.analysis.min_text_length == 0 {
            return Err(ConfigError::ZeroMinLength);
        }
        if self.export.file_name.trim().is_empty() {
            return Err(ConfigError::EmptyFileName);
        }
        Ok(())
    }

    /// Serialize the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
