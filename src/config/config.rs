use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{API_URL_ENV, CONFIG_FILE, GITHUB_API_URL, ORG_ENV, TOKEN_ENV};
use crate::error::{GitHubError, GitHubResult};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub token: Option<String>,
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

/// Everything needed to build a `GitHubClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub token: String,
    pub organization: String,
    pub api_url: String,
}

impl ClientSettings {
    /// Resolve settings from the process environment and the config file.
    pub fn load() -> GitHubResult<Self> {
        let config = load_config()?;
        Self::resolve(&config, |key| env::var(key).ok())
    }

    /// Environment values win over the config file; empty values are ignored.
    pub fn resolve<F>(config: &Config, lookup_env: F) -> GitHubResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, stored: &Option<String>| {
            lookup_env(key)
                .filter(|v| !v.is_empty())
                .or_else(|| stored.clone().filter(|v| !v.is_empty()))
        };

        Ok(Self {
            token: pick(TOKEN_ENV, &config.token).ok_or(GitHubError::TokenNotFound)?,
            organization: pick(ORG_ENV, &config.organization)
                .ok_or(GitHubError::OrganizationNotFound)?,
            api_url: pick(API_URL_ENV, &config.api_url)
                .unwrap_or_else(|| GITHUB_API_URL.to_string()),
        })
    }
}

pub fn config_path() -> GitHubResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE))
        .ok_or_else(|| GitHubError::ConfigError("Could not find home directory".to_string()))
}

pub fn load_config() -> GitHubResult<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> GitHubResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    serde_json::from_str(&config_str).map_err(|e| {
        GitHubError::ConfigError(format!("Invalid config file {}: {}", path.display(), e))
    })
}

pub fn save_config(config: &Config) -> GitHubResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> GitHubResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;

    Ok(())
}
