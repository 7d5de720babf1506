use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::github_client::client_error_as;
use super::GitHubClient;
use crate::constants::{PAGE_SIZE, SAML_IDENTITIES_QUERY};
use crate::error::{GitHubError, GitHubResult};
use crate::models::graphql::SamlIdentitiesData;
use crate::models::{Connection, GraphQLResponse};

#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Value>,
}

impl GitHubClient {
    /// Execute a GraphQL document against the `graphql` endpoint.
    ///
    /// Non-success statuses come back as `GitHubError::Http` so callers can map
    /// client errors; a response carrying `errors` becomes `GraphQLError`.
    pub async fn execute_query<T>(&self, query: &str, variables: Option<Value>) -> GitHubResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.url("graphql")?;
        let body = GraphQLRequest { query, variables };

        let response = self.send(self.client.post(url).json(&body)).await?;
        let graphql_response: GraphQLResponse<T> = response.json().await?;

        if let Some(errors) = graphql_response.errors {
            let error_messages: Vec<String> = errors.iter().map(|e| e.message.clone()).collect();
            return Err(GitHubError::GraphQLError(error_messages.join(", ")));
        }

        graphql_response
            .data
            .ok_or_else(|| GitHubError::GraphQLError("No data returned from GraphQL query".to_string()))
    }

    /// Find the SAML name identifier linked to a GitHub login.
    ///
    /// The API offers no filter on login, so every external identity of the
    /// organization is scanned page by page. The scan stops at the first match;
    /// identities not yet linked to a GitHub account are skipped.
    pub async fn get_saml_id(&self, login: &str) -> GitHubResult<Option<String>> {
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            if pages == self.max_pages {
                warn!(login, pages, "Pagination cap reached while scanning SAML identities");
                return Err(GitHubError::PageLimitExceeded(pages));
            }
            pages += 1;

            let variables = json!({
                "login": self.organization,
                "first": PAGE_SIZE,
                "after": cursor
            });
            debug!(page = pages, cursor = ?cursor, "Fetching SAML identities");

            let data: SamlIdentitiesData = client_error_as(
                self.execute_query(SAML_IDENTITIES_QUERY, Some(variables)).await,
                |status| GitHubError::OperationFailed {
                    message: "Unable to get SAML ID".to_string(),
                    status,
                },
            )?;

            let Some(provider) = data.organization.and_then(|o| o.saml_identity_provider) else {
                debug!(organization = %self.organization, "Organization has no SAML identity provider");
                return Ok(None);
            };

            let Connection { page_info, nodes } = provider.external_identities;

            if let Some(identity) = nodes.into_iter().find(|node| node.login() == Some(login)) {
                debug!(login, page = pages, "Found SAML identity");
                return Ok(identity.into_name_id());
            }

            if !page_info.has_next_page {
                return Ok(None);
            }

            match page_info.end_cursor {
                Some(end_cursor) => cursor = Some(end_cursor),
                None => {
                    warn!(page = pages, "hasNextPage without an endCursor, stopping scan");
                    return Ok(None);
                }
            }
        }
    }
}
