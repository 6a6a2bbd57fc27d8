//! YAML configuration for the AI provider.
//!
//! Lives at `~/.promptly/config.yaml`. A missing or unreadable file falls
//! back to defaults, with the API key taken from the environment.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub provider: String,
    pub model: String,
    pub api_url: String,
    pub api_key: String,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".promptly")
            .join("config.yaml")
    }

    pub fn load_or_default() -> Self {
        let config_path = Self::config_path();
        if config_path.exists() {
            if let Ok(config) = Self::load_from_file(&config_path) {
                return config;
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<()> {
        self.save_to_file(Self::config_path())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai: AiConfig {
                provider: "openai".to_string(),
                model: "gpt-3.5-turbo".to_string(),
                api_url: "https://api.openai.com/v1".to_string(),
                api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            },
        }
    }
}
