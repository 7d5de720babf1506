//! Shared fixtures for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gh_teams::GitHubClient;
use serde_json::{json, Value};
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

pub const ORG: &str = "acme";
pub const TOKEN: &str = "test-token";

pub fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::with_base_url(ORG, TOKEN, &server.uri()).unwrap()
}

pub fn team_json(id: u64, name: &str, slug: &str) -> Value {
    json!({
        "id": id,
        "node_id": "T_kwDOAAAA",
        "name": name,
        "slug": slug,
        "description": "",
        "privacy": "closed"
    })
}

/// One GraphQL page of external identities. Each node is `(login, name_id)`;
/// a `None` login is an identity not yet linked to a GitHub account.
pub fn saml_page(nodes: &[(Option<&str>, &str)], end_cursor: Option<&str>, has_next_page: bool) -> Value {
    let nodes: Vec<Value> = nodes
        .iter()
        .map(|(login, name_id)| {
            json!({
                "samlIdentity": { "nameId": name_id },
                "user": login.map(|l| json!({ "login": l }))
            })
        })
        .collect();

    json!({
        "data": {
            "organization": {
                "samlIdentityProvider": {
                    "externalIdentities": {
                        "pageInfo": {
                            "endCursor": end_cursor,
                            "startCursor": null,
                            "hasNextPage": has_next_page
                        },
                        "nodes": nodes
                    }
                }
            }
        }
    })
}

/// Serves the given bodies in order, one per request.
pub struct SequenceResponder {
    pages: Vec<Value>,
    current: Arc<AtomicUsize>,
}

impl SequenceResponder {
    pub fn new(pages: Vec<Value>) -> Self {
        Self {
            pages,
            current: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Respond for SequenceResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let idx = self.current.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(idx) {
            Some(page) => ResponseTemplate::new(200).set_body_json(page.clone()),
            None => ResponseTemplate::new(500).set_body_string("no more pages scripted"),
        }
    }
}

/// GraphQL request bodies received by the server, in order.
pub async fn graphql_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == "/graphql")
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}
