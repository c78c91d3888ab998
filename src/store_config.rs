use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Store configuration module
/// This module handles the translation store configuration including
/// loading, validating and saving configuration settings.
/// Represents the translation store configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file; None uses the platform data
    /// directory
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Locale used when a caller does not request one explicitly (ISO 639-1)
    #[serde(default = "default_locale")]
    pub default_locale: String,

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

fn default_locale() -> String {
    "en".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            database_path: None,
            default_locale: default_locale(),
            log_level: LogLevel::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: StoreConfig = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // The default locale must be a valid ISO 639-1 code
        let _locale_name = crate::locale_utils::locale_name(&self.default_locale)?;

        Ok(())
    }
}
