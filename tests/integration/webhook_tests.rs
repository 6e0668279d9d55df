// Integration tests for webhook endpoints

use crate::common::{TOKEN, setup, token_query};
use gitee_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

fn hook_json() -> String {
    json!({
        "id": 42,
        "url": "https://ci.example.com/hook",
        "push_events": true,
        "tag_push_events": false,
        "issues_events": true,
        "merge_requests_events": false,
        "created_at": "2024-01-01T00:00:00+08:00"
    })
    .to_string()
}

#[tokio::test]
async fn test_create_webhook_maps_event_names() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("POST", "/repos/acme/demo/hooks")
        .match_body(Matcher::PartialJson(json!({
            "access_token": TOKEN,
            "url": "https://ci.example.com/hook",
            "push_events": true,
            "issues_events": true,
            "tag_push_events": false,
            "merge_requests_events": false
        })))
        .with_status(201)
        .with_body(hook_json())
        .create_async()
        .await;

    let request = WebhookRequest::new("https://ci.example.com/hook").with_events(&["push", "issues"]);
    let hook = client
        .create_webhook("acme", "demo", &request)
        .await
        .expect("create_webhook");

    assert_eq!(hook.id, Some(42));
    assert!(hook.events.push_events);
    assert!(hook.events.issues_events);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_webhook_rejects_invalid_url_before_request() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("POST", "/repos/acme/demo/hooks")
        .expect(0)
        .create_async()
        .await;

    let request = WebhookRequest::new("not-a-url").with_events(&["push"]);
    let err = client
        .create_webhook("acme", "demo", &request)
        .await
        .expect_err("should fail");

    assert!(matches!(err, AppError::InvalidInput(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_webhook_uses_patch() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("PATCH", "/repos/acme/demo/hooks/42")
        .match_body(Matcher::PartialJson(json!({
            "password": "s3cret",
            "tag_push_events": true
        })))
        .with_status(200)
        .with_body(hook_json())
        .create_async()
        .await;

    let request = WebhookRequest::new("https://ci.example.com/hook")
        .with_password("s3cret")
        .with_events(&["release"]);
    client
        .update_webhook("acme", "demo", 42, &request)
        .await
        .expect("update_webhook");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_list_delete_and_test_webhook() {
    let (mut server, client) = setup().await;
    let get = server
        .mock("GET", "/repos/acme/demo/hooks/42")
        .match_query(token_query())
        .with_status(200)
        .with_body(hook_json())
        .create_async()
        .await;
    let list = server
        .mock("GET", "/repos/acme/demo/hooks")
        .match_query(token_query())
        .with_status(200)
        .with_body(format!("[{}]", hook_json()))
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/repos/acme/demo/hooks/42")
        .match_query(token_query())
        .with_status(204)
        .create_async()
        .await;
    let test = server
        .mock("POST", "/repos/acme/demo/hooks/42/tests")
        .with_status(204)
        .create_async()
        .await;

    let hook = client.get_webhook("acme", "demo", 42).await.expect("get_webhook");
    assert_eq!(hook.url.as_deref(), Some("https://ci.example.com/hook"));

    let hooks = client
        .list_webhooks("acme", "demo", ListOptions::default())
        .await
        .expect("list_webhooks");
    assert_eq!(hooks.len(), 1);

    client.test_webhook("acme", "demo", 42).await.expect("test_webhook");
    client.delete_webhook("acme", "demo", 42).await.expect("delete_webhook");

    get.assert_async().await;
    list.assert_async().await;
    delete.assert_async().await;
    test.assert_async().await;
}

#[tokio::test]
async fn test_webhook_id_must_be_positive() {
    let (_server, client) = setup().await;
    let err = client
        .delete_webhook("acme", "demo", 0)
        .await
        .expect_err("should fail");
    assert_eq!(err.to_string(), "invalid input: hook_id must be positive");
}
