use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::DEFAULT_LOCAL_ORIGIN;

fn default_true() -> bool {
    true
}

fn default_origin() -> String {
    DEFAULT_LOCAL_ORIGIN.to_string()
}

/// Application settings. The base origin is the one environment-specific
/// value: a loopback address for local development, or a public tunnel
/// hostname for remote testing.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    #[serde(default = "default_origin")]
    pub base_origin: String,
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
    #[serde(default = "default_true")]
    pub show_sale_info: bool,
}

impl Settings {
    pub fn load(settings_file: &str) -> Result<Self> {
        let path = Path::new(settings_file);
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "settings file not found at '{}'",
                settings_file
            ));
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", settings_file))?;

        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", settings_file))?;

        info!("Settings loaded from '{}'.", settings_file);
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_origin: default_origin(),
            show_timestamps: true,
            show_sale_info: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.base_origin, DEFAULT_LOCAL_ORIGIN);
        assert!(settings.show_timestamps);
        assert!(settings.show_sale_info);
    }

    #[test]
    fn test_settings_parse_full() {
        let raw = r#"{
            "base_origin": "https://pots.ngrok-free.dev",
            "show_timestamps": false,
            "show_sale_info": true
        }"#;

        let settings: Settings = serde_json::from_str(raw).unwrap();
        assert_eq!(settings.base_origin, "https://pots.ngrok-free.dev");
        assert!(!settings.show_timestamps);
    }

    #[test]
    fn test_settings_load_missing_file() {
        assert!(Settings::load("/no/such/settings.json").is_err());
    }
}
