// Pagination behaviour of list endpoints

use crate::common::{commit_json, page_query, setup};
use gitee_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_pages_are_concatenated_in_order() {
    let (mut server, client) = setup().await;

    let page1 = server
        .mock("GET", "/repos/acme/demo/branches")
        .match_query(page_query(1, 2))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"name": "a"}, {"name": "b"}]).to_string())
        .create_async()
        .await;
    let page2 = server
        .mock("GET", "/repos/acme/demo/branches")
        .match_query(page_query(2, 2))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"name": "c"}, {"name": "d"}]).to_string())
        .create_async()
        .await;
    let page3 = server
        .mock("GET", "/repos/acme/demo/branches")
        .match_query(page_query(3, 2))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"name": "e"}]).to_string())
        .create_async()
        .await;
    let page4 = server
        .mock("GET", "/repos/acme/demo/branches")
        .match_query(page_query(4, 2))
        .expect(0)
        .create_async()
        .await;

    let branches = client
        .list_branches("acme", "demo", ListOptions::new().with_per_page(2))
        .await
        .expect("list_branches should succeed");

    let names: Vec<_> = branches.iter().filter_map(|b| b.name.as_deref()).collect();
    assert_eq!(names, vec!["a", "b", "c", "d", "e"]);

    page1.assert_async().await;
    page2.assert_async().await;
    page3.assert_async().await;
    page4.assert_async().await;
}

#[tokio::test]
async fn test_exact_multiple_requests_one_extra_empty_page() {
    let (mut server, client) = setup().await;

    let page1 = server
        .mock("GET", "/repos/acme/demo/commits")
        .match_query(page_query(1, 2))
        .with_status(200)
        .with_body(json!([commit_json("1", "one"), commit_json("2", "two")]).to_string())
        .create_async()
        .await;
    let page2 = server
        .mock("GET", "/repos/acme/demo/commits")
        .match_query(page_query(2, 2))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let request = ListCommitsRequest::new().with_options(ListOptions::new().with_per_page(2));
    let commits = client
        .list_commits("acme", "demo", &request)
        .await
        .expect("list_commits should succeed");

    assert_eq!(commits.len(), 2);
    assert_eq!(commits[1].message.as_deref(), Some("two"));
    page1.assert_async().await;
    page2.assert_async().await;
}

#[tokio::test]
async fn test_pagination_starts_at_requested_page() {
    let (mut server, client) = setup().await;

    let page3 = server
        .mock("GET", "/repos/acme/demo/tags")
        .match_query(page_query(3, 10))
        .with_status(200)
        .with_body(json!([{"name": "v3", "commit": {"sha": "333"}}]).to_string())
        .create_async()
        .await;

    let tags = client
        .list_tags(
            "acme",
            "demo",
            ListOptions::new().with_page(3).with_per_page(10),
        )
        .await
        .expect("list_tags should succeed");

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].sha.as_deref(), Some("333"));
    page3.assert_async().await;
}

#[tokio::test]
async fn test_pagination_surfaces_errors() {
    let (mut server, client) = setup().await;

    let _page1 = server
        .mock("GET", "/repos/acme/demo/forks")
        .match_query(page_query(1, 100))
        .with_status(500)
        .with_body(r#"{"message":"boom"}"#)
        .create_async()
        .await;

    let err = client
        .list_forks("acme", "demo", ListOptions::default())
        .await
        .expect_err("a failing page should fail the listing");

    match err {
        AppError::Api { status, message } => {
            assert_eq!(status.as_u16(), 500);
            assert!(message.contains("boom"));
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_commit_filters_are_sent_with_every_page() {
    let (mut server, client) = setup().await;

    let mock = server
        .mock("GET", "/repos/acme/demo/commits")
        .match_query(mockito::Matcher::AllOf(vec![
            page_query(1, 100),
            mockito::Matcher::UrlEncoded("sha".into(), "develop".into()),
            mockito::Matcher::UrlEncoded("author".into(), "ann".into()),
        ]))
        .with_status(200)
        .with_body(json!([commit_json("abc", "msg")]).to_string())
        .create_async()
        .await;

    let request = ListCommitsRequest::new().with_sha("develop").with_author("ann");
    let commits = client
        .list_commits("acme", "demo", &request)
        .await
        .expect("list_commits should succeed");

    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].author_name.as_deref(), Some("Ann"));
    mock.assert_async().await;
}
