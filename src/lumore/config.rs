//! # Configuration
//!
//! Settings live in `config.json` inside the config directory. Resolution
//! order, highest first:
//!
//! 1. **Environment**: `LUMORE_API_URL` overrides `api_url`.
//! 2. **Config file**: `config.json`.
//! 3. **Compiled defaults**.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `api-url` | `http://localhost:5000/api` | Base URL every `AdminApi` request is sent to |
//! | `page-limit` | `20` | Page size for listings that do not ask for one |
//!
//! Directories come from [`directories::ProjectDirs`]. Setting `LUMORE_HOME`
//! puts both config and data under that one directory instead.

use crate::error::{LumoreError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_PAGE_LIMIT: u32 = 20;

pub const API_URL_ENV: &str = "LUMORE_API_URL";
pub const HOME_ENV: &str = "LUMORE_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminConfig {
    /// Base URL of the admin API, without trailing slash
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Users per page when listing
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl AdminConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LumoreError::Io)?;
        let config: AdminConfig =
            serde_json::from_str(&content).map_err(LumoreError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LumoreError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LumoreError::Serialization)?;
        fs::write(config_path, content).map_err(LumoreError::Io)?;
        Ok(())
    }

    /// Apply environment overrides on top of the loaded values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_url = url.trim().trim_end_matches('/').to_string();
            }
        }
        self
    }

    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(LumoreError::Config(format!(
                "api-url must start with http:// or https://, got '{}'",
                url
            )));
        }
        self.api_url = url.trim_end_matches('/').to_string();
        Ok(())
    }

    pub fn set_page_limit(&mut self, raw: &str) -> Result<()> {
        match raw.trim().parse::<u32>() {
            Ok(limit) if limit > 0 => {
                self.page_limit = limit;
                Ok(())
            }
            _ => Err(LumoreError::Config(format!(
                "page-limit must be a positive integer, got '{}'",
                raw
            ))),
        }
    }

    /// Value of a setting by its CLI name.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api-url" => Ok(self.api_url.clone()),
            "page-limit" => Ok(self.page_limit.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Set a setting by its CLI name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api-url" => self.set_api_url(value),
            "page-limit" => self.set_page_limit(value),
            other => Err(unknown_key(other)),
        }
    }

    /// All settings as `(name, value)` pairs, for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("api-url", self.api_url.clone()),
            ("page-limit", self.page_limit.to_string()),
        ]
    }
}

fn unknown_key(key: &str) -> LumoreError {
    LumoreError::Config(format!(
        "unknown key '{}' (expected api-url or page-limit)",
        key
    ))
}

/// Config and data directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl AdminPaths {
    /// `LUMORE_HOME` if set, otherwise the platform directories.
    pub fn discover() -> Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            return Ok(Self::under(PathBuf::from(home)));
        }
        let dirs = ProjectDirs::from("app", "lumore", "lumore-admin").ok_or_else(|| {
            LumoreError::Config("could not determine a home directory".to_string())
        })?;
        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Both directories under one root.
    pub fn under(root: PathBuf) -> Self {
        Self {
            config_dir: root.clone(),
            data_dir: root,
        }
    }
}
