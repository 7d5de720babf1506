use crate::client::GitHubClient;
use crate::config::{load_config, save_config, ClientSettings, Config};
use crate::constants::{API_URL_ENV, ORG_ENV, TOKEN_ENV};
use crate::error::{GitHubError, GitHubResult};
use std::sync::Arc;

/// Central context for CLI operations, managing configuration and client instances
pub struct CliContext {
    settings: Option<ClientSettings>,
    client: Option<Arc<GitHubClient>>,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new() -> Self {
        Self {
            settings: None,
            client: None,
        }
    }

    /// Load context from the environment and saved configuration
    pub fn load() -> GitHubResult<Self> {
        let settings = match ClientSettings::load() {
            Ok(settings) => Some(settings),
            Err(GitHubError::TokenNotFound) | Err(GitHubError::OrganizationNotFound) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            settings,
            client: None,
        })
    }

    /// Get or create a client (requires token and organization)
    pub fn client(&mut self) -> GitHubResult<Arc<GitHubClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let client = Arc::new(GitHubClient::from_settings(self.settings()?)?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Get the resolved settings, loading them if necessary
    pub fn settings(&mut self) -> GitHubResult<&ClientSettings> {
        if self.settings.is_none() {
            self.settings = Some(ClientSettings::load()?);
        }

        self.settings.as_ref().ok_or(GitHubError::TokenNotFound)
    }

    /// Store token and/or organization in the config file
    pub fn save(&mut self, token: Option<String>, organization: Option<String>) -> GitHubResult<Config> {
        let mut config = load_config()?;
        if token.is_some() {
            config.token = token;
        }
        if organization.is_some() {
            config.organization = organization;
        }
        save_config(&config)?;

        self.settings = None;
        self.client = None;
        Ok(config)
    }

    pub fn has_settings(&self) -> bool {
        self.settings.is_some()
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
pub struct CliContextBuilder {
    token: Option<String>,
    organization: Option<String>,
    api_url: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            token: None,
            organization: None,
            api_url: None,
        }
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    pub fn with_organization(mut self, organization: String) -> Self {
        self.organization = Some(organization);
        self
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Explicit values are used as-is; anything missing is filled from the
    /// environment and config file.
    pub fn build(self) -> GitHubResult<CliContext> {
        if self.token.is_none() && self.organization.is_none() && self.api_url.is_none() {
            return CliContext::load();
        }

        let env = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
        let stored = load_config().unwrap_or_default();
        let merged = Config {
            token: self.token.or_else(|| env(TOKEN_ENV)).or(stored.token),
            organization: self.organization.or_else(|| env(ORG_ENV)).or(stored.organization),
            api_url: self.api_url.or_else(|| env(API_URL_ENV)).or(stored.api_url),
        };
        let settings = ClientSettings::resolve(&merged, |_| None)?;

        Ok(CliContext {
            settings: Some(settings),
            client: None,
        })
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
