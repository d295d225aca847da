use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    API_KEY_ENV_VARS, APP_DIR_NAME, CONFIG_FILE, DATA_DIR_ENV, DEFAULT_DEFINITION_LANGUAGE,
    DEFAULT_MODEL,
};
use crate::error::{ErrorContext, HubError, HubResult};

/// Overrides the config file location; mostly useful for tests and scripts.
pub const CONFIG_PATH_ENV: &str = "READING_HUB_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub model: Option<String>,
    pub definition_language: Option<String>,
}

impl Config {
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn definition_language(&self) -> &str {
        self.definition_language
            .as_deref()
            .unwrap_or(DEFAULT_DEFINITION_LANGUAGE)
    }

    /// Where the JSON documents live: config, then environment, then the platform data dir.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        if let Ok(dir) = env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                return PathBuf::from(dir);
            }
        }
        dirs::data_dir()
            .unwrap_or_else(env::temp_dir)
            .join(APP_DIR_NAME)
    }
}

pub fn config_path() -> HubResult<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    let home_dir = dirs::home_dir()
        .ok_or_else(|| HubError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

/// Load the config file; a missing or unreadable file yields the defaults.
pub fn load_config() -> Config {
    let Ok(config_path) = config_path() else {
        return Config::default();
    };

    match fs::read_to_string(&config_path) {
        Ok(config_str) => serde_json::from_str(&config_str).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

pub fn save_config(config: &Config) -> HubResult<()> {
    let config_path = config_path()?;
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(&config_path, config_str)
        .with_context(|| format!("Failed to write config file {}", config_path.display()))?;

    Ok(())
}

pub fn get_api_key() -> HubResult<String> {
    // First check environment variables
    for var in API_KEY_ENV_VARS {
        if let Ok(key) = env::var(var) {
            if !key.trim().is_empty() {
                return Ok(key.trim().to_string());
            }
        }
    }

    // Then check config file
    load_config()
        .api_key
        .filter(|key| !key.trim().is_empty())
        .ok_or(HubError::ApiKeyNotFound)
}
