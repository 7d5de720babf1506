mod common;

use common::*;
use gh_teams::GitHubError;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_pages(server: &MockServer, pages: Vec<serde_json::Value>) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(SequenceResponder::new(pages))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_match_on_second_page() {
    let server = MockServer::start().await;
    mount_pages(
        &server,
        vec![
            saml_page(
                &[(Some("user1"), "user1@example.com"), (Some("user2"), "user2@example.com")],
                Some("some-cursor"),
                true,
            ),
            saml_page(
                &[(Some("user3"), "user3@example.com"), (Some("user4"), "user4@example.com")],
                None,
                false,
            ),
        ],
    )
    .await;

    let name_id = client_for(&server).get_saml_id("user3").await.unwrap();
    assert_eq!(name_id.as_deref(), Some("user3@example.com"));

    let bodies = graphql_bodies(&server).await;
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0]["variables"]["login"], json!("acme"));
    assert_eq!(bodies[0]["variables"]["first"], json!(100));
    assert_eq!(bodies[0]["variables"]["after"], json!(null));
    assert_eq!(bodies[1]["variables"]["after"], json!("some-cursor"));
}

#[tokio::test]
async fn test_match_on_first_page_stops_scanning() {
    let server = MockServer::start().await;
    mount_pages(
        &server,
        vec![
            saml_page(&[(Some("user1"), "user1@example.com")], Some("some-cursor"), true),
            saml_page(&[(Some("user2"), "user2@example.com")], None, false),
        ],
    )
    .await;

    let name_id = client_for(&server).get_saml_id("user1").await.unwrap();
    assert_eq!(name_id.as_deref(), Some("user1@example.com"));
    assert_eq!(graphql_bodies(&server).await.len(), 1);
}

#[tokio::test]
async fn test_unknown_login_scans_every_page() {
    let server = MockServer::start().await;
    mount_pages(
        &server,
        vec![
            saml_page(
                &[(Some("user1"), "user1@example.com"), (Some("user2"), "user2@example.com")],
                Some("cursor-1"),
                true,
            ),
            saml_page(&[(Some("user3"), "user3@example.com")], Some("cursor-2"), true),
            saml_page(&[(Some("user4"), "user4@example.com")], Some("cursor-3"), false),
        ],
    )
    .await;

    let name_id = client_for(&server).get_saml_id("user5").await.unwrap();
    assert_eq!(name_id, None);

    let bodies = graphql_bodies(&server).await;
    assert_eq!(bodies.len(), 3);
    assert_eq!(bodies[2]["variables"]["after"], json!("cursor-2"));
}

#[tokio::test]
async fn test_unlinked_identities_are_skipped() {
    let server = MockServer::start().await;
    mount_pages(
        &server,
        vec![saml_page(
            &[(None, "pending@example.com"), (Some("octocat"), "octo@example.com")],
            None,
            false,
        )],
    )
    .await;

    let name_id = client_for(&server).get_saml_id("octocat").await.unwrap();
    assert_eq!(name_id.as_deref(), Some("octo@example.com"));
}

#[tokio::test]
async fn test_missing_end_cursor_stops_scan() {
    let server = MockServer::start().await;
    mount_pages(&server, vec![saml_page(&[(Some("user1"), "user1@example.com")], None, true)]).await;

    let name_id = client_for(&server).get_saml_id("user2").await.unwrap();
    assert_eq!(name_id, None);
    assert_eq!(graphql_bodies(&server).await.len(), 1);
}

#[tokio::test]
async fn test_organization_without_saml_provider() {
    let server = MockServer::start().await;
    mount_pages(
        &server,
        vec![json!({"data": {"organization": {"samlIdentityProvider": null}}})],
    )
    .await;

    let name_id = client_for(&server).get_saml_id("octocat").await.unwrap();
    assert_eq!(name_id, None);
}

#[tokio::test]
async fn test_client_error_fails_resolution() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Bad credentials"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).get_saml_id("octocat").await.unwrap_err();
    match err {
        GitHubError::OperationFailed { message, status } => {
            assert_eq!(message, "Unable to get SAML ID");
            assert_eq!(status, 401);
        }
        other => panic!("Expected OperationFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_graphql_errors_are_reported() {
    let server = MockServer::start().await;
    mount_pages(
        &server,
        vec![json!({
            "data": null,
            "errors": [{"message": "Could not resolve to an Organization with the login of 'acme'."}]
        })],
    )
    .await;

    let err = client_for(&server).get_saml_id("octocat").await.unwrap_err();
    match err {
        GitHubError::GraphQLError(msg) => assert!(msg.contains("Could not resolve")),
        other => panic!("Expected GraphQLError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_page_cap_applies_to_saml_scan() {
    let server = MockServer::start().await;
    mount_pages(
        &server,
        vec![
            saml_page(&[(Some("user1"), "user1@example.com")], Some("c1"), true),
            saml_page(&[(Some("user2"), "user2@example.com")], Some("c2"), true),
            saml_page(&[(Some("user3"), "user3@example.com")], None, false),
        ],
    )
    .await;

    let client = client_for(&server).with_max_pages(2);
    let result = client.get_saml_id("user3").await;

    assert!(matches!(result, Err(GitHubError::PageLimitExceeded(2))));
    assert_eq!(graphql_bodies(&server).await.len(), 2);
}
