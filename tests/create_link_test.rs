use anyhow::Result;
use httpmock::prelude::*;
use linkdock::{ApiClient, CollectionRef, LinkType, LinkdockError, NewLink};
use serde_json::{json, Value};

fn created_link_payload() -> Value {
    json!({
        "id": 10,
        "name": "Example",
        "type": "url",
        "description": "",
        "createdById": 3,
        "collectionId": 2,
        "icon": null,
        "iconWeight": null,
        "color": null,
        "url": "https://example.com",
        "textContent": null,
        "preview": null,
        "image": null,
        "pdf": null,
        "readable": null,
        "monolith": null,
        "lastPreserved": null,
        "importDate": null,
        "createdAt": "2024-03-01T12:00:00Z",
        "updatedAt": "2024-03-01T12:00:00Z",
        "tags": [],
        "collection": {
            "id": 2,
            "name": "Inbox",
            "description": "",
            "icon": null,
            "iconWeight": null,
            "color": null,
            "parentId": null,
            "isPublic": false,
            "ownerId": 3,
            "createdById": 3,
            "createdAt": "2024-03-01T12:00:00Z",
            "updatedAt": "2024-03-01T12:00:00Z"
        },
        "pinnedBy": []
    })
}

#[tokio::test]
async fn test_create_link_posts_exact_body_and_parses_response() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/links")
            .header("authorization", "Bearer secret-token")
            .json_body(json!({
                "name": "Example",
                "url": "https://example.com",
                "type": "url",
                "collection": {}
            }));
        // write endpoints answer with the bare entity, no envelope
        then.status(200).json_body(created_link_payload());
    });

    let new_link = NewLink::new(
        Some("Example".to_string()),
        Some("https://example.com".to_string()),
        Some(LinkType::Url),
        None,
    )?;

    let client = ApiClient::new(server.base_url(), "tester", "secret-token");
    let link = client.create_link(&new_link).await?;

    api_mock.assert();
    assert_eq!(link.id, 10);
    assert_eq!(link.name, "Example");
    assert_eq!(link.collection.id, 2);
    Ok(())
}

#[tokio::test]
async fn test_create_link_with_bare_collection_reference() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/links").json_body(json!({
            "url": "https://example.com",
            "collection": {"id": 2}
        }));
        then.status(200).json_body(created_link_payload());
    });

    let new_link = NewLink::new(None, Some("https://example.com".to_string()), None, None)?
        .with_collection(CollectionRef::by_id(2));

    let client = ApiClient::new(server.base_url(), "tester", "secret-token");
    client.create_link(&new_link).await?;

    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_overlength_field_never_reaches_the_server() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/links");
        then.status(200).json_body(created_link_payload());
    });

    let mut new_link =
        NewLink::new(None, Some("https://example.com".to_string()), None, None).unwrap();
    new_link.description = Some("a".repeat(2049));

    let client = ApiClient::new(server.base_url(), "tester", "secret-token");
    let err = client.create_link(&new_link).await.unwrap_err();

    match err {
        LinkdockError::ValidationError { field, .. } => assert_eq!(field, "description"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(api_mock.hits(), 0);
}
