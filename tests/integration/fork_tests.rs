// Integration tests for fork endpoints

use crate::common::{setup, token_query};
use gitee_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_create_fork_into_organization() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("POST", "/repos/acme/demo/forks")
        .match_body(Matcher::PartialJson(json!({"organization": "team"})))
        .with_status(201)
        .with_body(
            json!({
                "id": 77,
                "full_name": "team/demo",
                "html_url": "https://gitee.com/team/demo.git",
                "owner": {"login": "team"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let fork = client
        .create_fork("acme", "demo", &CreateForkRequest::new().into_organization("team"))
        .await
        .expect("create_fork");

    assert_eq!(fork.id, Some(77));
    assert_eq!(fork.owner.as_deref(), Some("team"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_forks() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", "/repos/acme/demo/forks")
        .match_query(token_query())
        .with_status(200)
        .with_body(json!([{"full_name": "a/demo"}, {"full_name": "b/demo"}]).to_string())
        .create_async()
        .await;

    let forks = client
        .list_forks("acme", "demo", ListOptions::default())
        .await
        .expect("list_forks");
    let names: Vec<_> = forks.iter().filter_map(|f| f.full_name.as_deref()).collect();
    assert_eq!(names, vec!["a/demo", "b/demo"]);
}
