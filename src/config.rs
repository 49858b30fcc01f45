//! Configuration handling for the TUI

use crate::auth::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured API key
pub const API_KEY_ENV: &str = "SIGNIN_API_KEY";

/// Environment variable overriding the identity provider address
pub const AUTH_URL_ENV: &str = "SIGNIN_AUTH_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Web API key of the identity provider project
    pub api_key: Option<String>,
    /// Identity provider base address
    pub auth_base_url: Option<String>,
    /// Sign-in request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "signin", "signin-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the optional theme file
    pub fn theme_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("theme.json"))
    }

    /// Path of the log file
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("signin-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path, defaulting when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// API key, preferring the environment over the file
    pub fn api_key(&self) -> Option<String> {
        self.api_key_with(std::env::var(API_KEY_ENV).ok())
    }

    fn api_key_with(&self, env: Option<String>) -> Option<String> {
        non_empty(env).or_else(|| self.api_key.clone())
    }

    /// Identity provider address, preferring the environment over the file
    pub fn auth_base_url(&self) -> String {
        self.auth_base_url_with(std::env::var(AUTH_URL_ENV).ok())
    }

    fn auth_base_url_with(&self, env: Option<String>) -> String {
        non_empty(env)
            .or_else(|| self.auth_base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

/// Empty environment values count as unset
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
