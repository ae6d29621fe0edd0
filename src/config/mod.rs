use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Page to open on launch (overridden by --page).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_page: Option<String>,

    /// Theme selected last session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Seed for the synthetic dataset (overridden by --seed).
    #[serde(default = "default_seed")]
    pub dataset_seed: u64,

    /// Number of rows to generate.
    #[serde(default = "default_rows")]
    pub dataset_rows: usize,

    /// Simulated "thinking" pause before a chat reply, in milliseconds.
    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,
}

fn default_seed() -> u64 {
    data::DEFAULT_SEED
}

fn default_rows() -> usize {
    data::DEFAULT_ROWS
}

fn default_reply_delay() -> u64 {
    600
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_page: None,
            theme: None,
            dataset_seed: default_seed(),
            dataset_rows: default_rows(),
            reply_delay_ms: default_reply_delay(),
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("paneru");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(AppConfig::default()),
        };

        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
        }

        let config = AppConfig::default();
        let _ = config.save();
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Clamp nonsense values before they hit disk.
        let mut clean = self.clone();
        if clean.dataset_rows == 0 {
            clean.dataset_rows = default_rows();
        }
        clean.dataset_rows = clean.dataset_rows.min(10_000);
        if clean.theme.as_deref().map(str::is_empty).unwrap_or(false) {
            clean.theme = None;
        }

        let content = toml::to_string_pretty(&clean)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            start_page: Some("analytics".to_string()),
            theme: Some("Ocean".to_string()),
            dataset_seed: 7,
            dataset_rows: 250,
            reply_delay_ms: 300,
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config.start_page, deserialized.start_page);
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.dataset_seed, deserialized.dataset_seed);
        assert_eq!(config.dataset_rows, deserialized.dataset_rows);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.dataset_seed, data::DEFAULT_SEED);
        assert_eq!(config.dataset_rows, data::DEFAULT_ROWS);
        assert_eq!(config.reply_delay_ms, 600);
        assert!(config.start_page.is_none());
    }
}
