use crate::error::{DiscoverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "REPODISCOVER_API_URL";

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_user_agent() -> String {
    format!("repodiscover/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DiscoverConfig {
    /// Backend root, without the `/v1` prefix.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds. `None` keeps the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for DiscoverConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl DiscoverConfig {
    /// Load the config file, then apply the environment override.
    ///
    /// A missing or unparsable file yields the defaults.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                log::debug!("{} overrides api_base with {}", API_URL_ENV, url);
                config.api_base = url;
            }
        }
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&config_path)
            .map_err(|e| DiscoverError::config_read_failed(&config_path, e))?;
        Ok(serde_json::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Ignoring unparsable config {}: {}", config_path.display(), e);
            Self::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| DiscoverError::config_write_failed(parent, e))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)
            .map_err(|e| DiscoverError::config_write_failed(&config_path, e))?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").map_err(|_| DiscoverError::HomeNotFound)?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("repodiscover")
            .join("config.json"))
    }

    pub fn set_api_base(&mut self, url: impl Into<String>) -> Result<()> {
        self.api_base = url.into().trim_end_matches('/').to_string();
        self.save()
    }

    /// `api_base` without trailing slashes.
    pub fn api_root(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}
