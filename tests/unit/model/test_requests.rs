use assert_json_diff::assert_json_eq;
use gitee_client::prelude::*;
use serde_json::json;

#[test]
fn test_list_options_defaults() {
    let options = ListOptions::default();
    assert_eq!(options.page, 1);
    assert_eq!(options.per_page, 100);
    assert_json_eq!(
        serde_json::to_value(&options).unwrap(),
        json!({"page": 1, "per_page": 100})
    );
}

#[test]
fn test_list_options_from_config() {
    let mut config = Config::with_token("t", "https://gitee.com/api/v5");
    config.list.per_page = 25;
    config.list.direction = Some("desc".to_string());

    let options = ListOptions::from_config(&config.list).with_page(3);
    assert_json_eq!(
        serde_json::to_value(&options).unwrap(),
        json!({"page": 3, "per_page": 25, "direction": "desc"})
    );
}

#[test]
fn test_list_commits_request_flattens_options() {
    let request = ListCommitsRequest::new()
        .with_sha("main")
        .with_author("ann")
        .with_options(ListOptions::new().with_per_page(10));

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"sha": "main", "author": "ann", "page": 1, "per_page": 10})
    );
}

#[test]
fn test_create_repo_request_omits_owner() {
    let request = CreateRepoRequest::new("acme", "demo")
        .private(true)
        .with_description("Demo repo");

    assert_eq!(request.owner, "acme");
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "name": "demo",
            "description": "Demo repo",
            "private": true,
            "auto_init": false,
            "has_issues": true,
            "has_wiki": true
        })
    );
}

#[test]
fn test_create_branch_request() {
    let request = CreateBranchRequest::new("feature", "master");
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"refs": "master", "branch_name": "feature"})
    );
}

#[test]
fn test_create_fork_request_defaults_to_user() {
    assert_json_eq!(serde_json::to_value(CreateForkRequest::new()).unwrap(), json!({}));

    let request = CreateForkRequest::new().into_organization("team").with_name("copy");
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"organization": "team", "name": "copy"})
    );
}

#[test]
fn test_webhook_request_payload() {
    let request = WebhookRequest::new("https://ci.example.com/hook")
        .with_password("s3cret")
        .with_events(&["push", "pull_request", "unknown"]);

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "url": "https://ci.example.com/hook",
            "password": "s3cret",
            "push_events": true,
            "tag_push_events": false,
            "merge_requests_events": true,
            "issues_events": false
        })
    );
}

#[test]
fn test_webhook_events_empty() {
    let names: [&str; 0] = [];
    assert!(WebhookEvents::from_names(&names).is_empty());
    assert!(WebhookEvents::from_names(&["note"]).is_empty());
    assert!(!WebhookEvents::from_names(&["tag"]).is_empty());
}

#[test]
fn test_git_ref_names() {
    assert_eq!(GitRef::parse("refs/tags/v2").name(), "v2");
    assert_eq!(GitRef::parse("refs/heads/dev"), GitRef::Branch("dev"));
    assert_eq!(GitRef::parse("v2"), GitRef::Branch("v2"));
}
