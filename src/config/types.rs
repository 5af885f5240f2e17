//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::controller::DEFAULT_MIN_TEXT_LENGTH;
use crate::report::REPORT_FILE_NAME;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Where the analysis service lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

pub fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

pub fn default_timeout_secs() -> u64 {
    30
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Client-side input checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum trimmed character count before a request is sent
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,
}

pub fn default_min_text_length() -> usize {
    DEFAULT_MIN_TEXT_LENGTH
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_text_length: default_min_text_length(),
        }
    }
}

/// Report export destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_directory")]
    pub directory: String,
    #[serde(default = "default_export_file_name")]
    pub file_name: String,
}

pub fn default_export_directory() -> String {
    ".".to_string()
}

pub fn default_export_file_name() -> String {
    REPORT_FILE_NAME.to_string()
}

impl ExportConfig {
    /// Export directory with a leading `~/` expanded.
    pub fn directory_path(&self) -> PathBuf {
        if let Some(stripped) = self.directory.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(&self.directory)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            file_name: default_export_file_name(),
        }
    }
}
