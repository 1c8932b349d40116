//! Configuration management for Country TUI
//!
//! Handles loading and saving settings to ~/.config/countrytui/config.json

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Path to a countries JSON file. If None, uses the embedded dataset
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    /// Locale override for UI chrome (e.g., "fr", "en"). If None, uses system locale
    #[serde(default)]
    pub locale: Option<String>,
    /// Language the table opens with (one of the 8 supported names)
    #[serde(default)]
    pub start_language: Option<String>,
}

impl AppConfig {
    /// Get the config file path (~/.config/countrytui/config.json)
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("countrytui");

        Ok(config_dir.join("config.json"))
    }

    /// Load configuration from disk, creating empty config if it doesn't exist
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(_) => {
                let config = Self::default();
                // Try to save the empty config
                let _ = config.save();
                config
            }
        }
    }

    /// Try to load configuration from disk
    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .context("Failed to read config file")?;

        let config: Self = serde_json::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_deserializes_with_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = AppConfig {
            dataset: Some(PathBuf::from("/data/countries.json")),
            locale: Some("fr".to_string()),
            start_language: Some("Japanese".to_string()),
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
