use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{RequestBuilder, Response, Url};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::config::ClientSettings;
use crate::constants::{DEFAULT_MAX_PAGES, GITHUB_API_URL, PAGE_SIZE, TEAM_PRIVACY, USER_AGENT};
use crate::error::{GitHubError, GitHubResult};
use crate::models::team::is_falsy;
use crate::models::*;

/// Organization-scoped GitHub client.
///
/// Holds only immutable configuration, so a single instance can be shared
/// behind an `Arc`.
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) organization: String,
    pub(crate) max_pages: usize,
}

impl GitHubClient {
    /// Client for `organization` against the public GitHub API.
    pub fn new(organization: impl Into<String>, token: &str) -> GitHubResult<Self> {
        Self::with_base_url(organization, token, GITHUB_API_URL)
    }

    pub fn with_base_url(
        organization: impl Into<String>,
        token: &str,
        base_url: &str,
    ) -> GitHubResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| GitHubError::ConfigError("Invalid access token format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .build()?;

        Self::from_http_client(organization, client, base_url)
    }

    pub fn from_settings(settings: &ClientSettings) -> GitHubResult<Self> {
        Self::with_base_url(
            settings.organization.clone(),
            &settings.token,
            &settings.api_url,
        )
    }

    /// Wrap a pre-configured transport. The client is expected to carry its
    /// own authentication headers.
    pub fn from_http_client(
        organization: impl Into<String>,
        client: reqwest::Client,
        base_url: &str,
    ) -> GitHubResult<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            organization: organization.into(),
            max_pages: DEFAULT_MAX_PAGES,
        })
    }

    /// Cap the number of pages a single listing or SAML scan may follow.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a relative API path, or pass an absolute URL through.
    pub(crate) fn url(&self, path: &str) -> GitHubResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| GitHubError::InvalidUrl(format!("{}: {}", path, e)))
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> GitHubResult<Response> {
        let response = request.send().await?;
        check_status(response).await
    }

    /// Look up a team by slug.
    ///
    /// Any client-class response is reported as `Lookup::NotFound`, so a
    /// missing team and a forbidden one look the same apart from the status.
    pub async fn get_team(&self, slug: &str) -> GitHubResult<Lookup<Team>> {
        let url = self.url(&format!("orgs/{}/teams/{}", self.organization, slug))?;
        debug!(%url, "Fetching team");

        match self.send(self.client.get(url)).await {
            Ok(response) => Ok(Lookup::Found(Team::from_response(response).await?)),
            Err(e) if e.is_client_error() => {
                let status = e.status().unwrap_or_default();
                debug!(slug, status, "Team lookup returned a client error");
                Ok(Lookup::NotFound { status })
            }
            Err(e) => Err(e),
        }
    }

    pub async fn create_team(&self, name: &str, description: &str) -> GitHubResult<Team> {
        let url = self.url(&format!("orgs/{}/teams", self.organization))?;
        let body = json!({
            "name": name,
            "description": description,
            "privacy": TEAM_PRIVACY
        });

        let response = client_error_as(self.send(self.client.post(url).json(&body)).await, |status| {
            GitHubError::OperationFailed {
                message: "Unable to create team".to_string(),
                status,
            }
        })?;

        let team = Team::from_response(response).await?;
        info!(team = team.slug(), id = team.id(), "Created team");
        Ok(team)
    }

    /// Update a team's description.
    ///
    /// Resolves the team id first, then patches it. The two calls are not
    /// atomic: the team may disappear in between, which surfaces as a failed
    /// update.
    pub async fn set_team_description(&self, slug: &str, description: &str) -> GitHubResult<Team> {
        #[derive(Debug, Deserialize)]
        struct TeamId {
            id: u64,
        }

        let url = self.url(&format!("orgs/{}/teams/{}", self.organization, slug))?;
        let response = client_error_as(self.send(self.client.get(url)).await, |status| {
            GitHubError::InvalidInput {
                message: "Team does not exist".to_string(),
                status: Some(status),
            }
        })?;
        let TeamId { id } = response.json().await?;

        let url = self.url(&format!("teams/{}", id))?;
        let body = json!({ "description": description });
        let response = client_error_as(self.send(self.client.patch(url).json(&body)).await, |status| {
            GitHubError::OperationFailed {
                message: "Unable to update description".to_string(),
                status,
            }
        })?;

        info!(team = slug, id, "Updated team description");
        Team::from_response(response).await
    }

    /// Link a team to exactly one identity-provider group, replacing any
    /// existing mapping.
    pub async fn sync_team_and_group(
        &self,
        slug: &str,
        group_id: &str,
        display_name: &str,
        description: &str,
    ) -> GitHubResult<bool> {
        let url = self.url(&format!(
            "orgs/{}/teams/{}/team-sync/group-mappings",
            self.organization, slug
        ))?;
        let body = GroupMappings::single(TeamSyncGroup {
            group_id: group_id.to_string(),
            group_name: display_name.to_string(),
            group_description: description.to_string(),
        });

        client_error_as(self.send(self.client.patch(url).json(&body)).await, |status| {
            GitHubError::OperationFailed {
                message: "Unable to sync team and group".to_string(),
                status,
            }
        })?;

        info!(team = slug, group_id, "Synced team with group");
        Ok(true)
    }

    /// All repositories of the organization, in the order the API returns them.
    pub async fn get_repos(&self) -> GitHubResult<Vec<Value>> {
        self.get_paginated(&format!("orgs/{}/repos", self.organization), PAGE_SIZE)
            .await
    }

    /// All members of the organization, in the order the API returns them.
    pub async fn get_members(&self) -> GitHubResult<Vec<Value>> {
        self.get_paginated(&format!("orgs/{}/members", self.organization), PAGE_SIZE)
            .await
    }

    /// Trigger a `workflow_dispatch` run of `workflow` in `repo` at `git_ref`.
    pub async fn dispatch_workflow(
        &self,
        repo: &str,
        workflow: &str,
        git_ref: &str,
        inputs: Option<&Map<String, Value>>,
    ) -> GitHubResult<()> {
        let url = self.url(&format!(
            "repos/{}/{}/actions/workflows/{}/dispatches",
            self.organization, repo, workflow
        ))?;

        let mut body = json!({ "ref": git_ref });
        let inputs = inputs.map(filter_inputs).unwrap_or_default();
        if !inputs.is_empty() {
            body["inputs"] = Value::Object(inputs);
        }

        client_error_as(self.send(self.client.post(url).json(&body)).await, |status| {
            GitHubError::OperationFailed {
                message: "Unable to dispatch workflow".to_string(),
                status,
            }
        })?;

        info!(repo, workflow, git_ref, "Dispatched workflow");
        Ok(())
    }
}

/// Drop workflow inputs whose values are falsy.
pub(crate) fn filter_inputs(inputs: &Map<String, Value>) -> Map<String, Value> {
    inputs
        .iter()
        .filter(|(_, value)| !is_falsy(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

pub(crate) async fn check_status(response: Response) -> GitHubResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(GitHubError::Http {
        status: status.as_u16(),
        body,
    })
}

/// Replace a 4xx `Http` error with the operation-specific error. Server and
/// transport errors pass through untouched.
pub(crate) fn client_error_as<T, F>(result: GitHubResult<T>, f: F) -> GitHubResult<T>
where
    F: FnOnce(u16) -> GitHubError,
{
    result.map_err(|e| match e {
        e if e.is_client_error() => f(e.status().unwrap_or_default()),
        other => other,
    })
}

fn parse_base_url(base_url: &str) -> GitHubResult<Url> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };

    Url::parse(&normalized).map_err(|e| GitHubError::InvalidUrl(format!("{}: {}", base_url, e)))
}
