use httpmock::prelude::*;
use linkdock::{ApiClient, LinkdockError};
use serde_json::json;

#[tokio::test]
async fn test_session_exchange_posts_form_credentials() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/session")
            .header("content-type", "application/x-www-form-urlencoded")
            .body_contains("username=tester")
            .body_contains("password=secret-token")
            .body_contains("session_name=");
        then.status(200).json_body(json!({
            "token": "short-lived-session-token"
        }));
    });

    let client = ApiClient::new(server.base_url(), "tester", "secret-token");
    let body = client.authenticate().await.unwrap();

    api_mock.assert();
    // the exchange returns the body untouched, no envelope unwrapping
    assert_eq!(body["token"], json!("short-lived-session-token"));
}

#[tokio::test]
async fn test_session_exchange_rejection_is_an_authentication_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/session");
        then.status(401);
    });

    let client = ApiClient::new(server.base_url(), "tester", "wrong-token");
    let err = client.authenticate().await.unwrap_err();
    assert!(matches!(
        err,
        LinkdockError::AuthenticationError { status: 401 }
    ));
}

#[tokio::test]
async fn test_requests_do_not_require_a_prior_session_exchange() {
    // the bearer token authenticates requests directly; no handshake happens
    let server = MockServer::start();
    let session_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/session");
        then.status(200).json_body(json!({"token": "unused"}));
    });
    let links_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/links")
            .header("authorization", "Bearer secret-token");
        then.status(200).json_body(json!({"response": []}));
    });

    let client = ApiClient::new(server.base_url(), "tester", "secret-token");
    let links = client.get_links().await.unwrap();

    assert!(links.is_empty());
    links_mock.assert();
    assert_eq!(session_mock.hits(), 0);
}
