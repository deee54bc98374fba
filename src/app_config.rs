use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path to the pronunciation table file
    #[serde(default = "default_table_path")]
    pub table_path: String,

    /// Maximum rendered width of an output line, in characters
    #[serde(default = "default_max_width")]
    pub max_width: usize,

    /// Maximum number of files processed concurrently in folder mode
    #[serde(default = "default_concurrent_files")]
    pub concurrent_files: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_table_path() -> String {
    "pronunciations.csv".to_string()
}

fn default_max_width() -> usize {
    80
}

fn default_concurrent_files() -> usize {
    4
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.table_path.trim().is_empty() {
            return Err(anyhow!("Pronunciation table path is required"));
        }

        if self.max_width == 0 {
            return Err(anyhow!("Maximum line width must be greater than zero"));
        }

        if self.concurrent_files == 0 {
            return Err(anyhow!("Concurrent file count must be greater than zero"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            table_path: default_table_path(),
            max_width: default_max_width(),
            concurrent_files: default_concurrent_files(),
            log_level: LogLevel::default(),
        }
    }
}
