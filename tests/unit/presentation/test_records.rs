use gitee_client::prelude::*;
use serde_json::{Value, json};

#[test]
fn test_records_keep_source() {
    let source = json!({"name": "main", "protected": "true", "commit": {"sha": "abc"}});
    let branch = Branch::from(source.clone());
    assert_eq!(branch.sha.as_deref(), Some("abc"));
    assert!(branch.protected);
    assert_eq!(branch.source, source);
}

#[test]
fn test_records_tolerate_null_body() {
    let repo = Repository::from(Value::Null);
    assert!(repo.id.is_none());
    assert!(!repo.private);

    let hook = Webhook::from(Value::Null);
    assert!(hook.events.is_empty());

    let user = User::from(Value::Null);
    assert!(user.login.is_none());
}

#[test]
fn test_tag_from_source() {
    let tag = Tag::from(json!({
        "name": "v1.0",
        "message": "",
        "commit": {"sha": "c0ffee", "date": "2024-01-01T00:00:00+08:00"}
    }));
    assert_eq!(tag.name.as_deref(), Some("v1.0"));
    assert_eq!(tag.sha.as_deref(), Some("c0ffee"));
    assert_eq!(tag.message, None);
}

#[test]
fn test_ref_commit_from_release_and_branch() {
    let from_release = RefCommit::from_release(&json!({
        "tag_name": "v1.0",
        "target_commitish": "c0ffee"
    }));
    assert_eq!(
        from_release,
        RefCommit {
            sha: Some("c0ffee".to_string()),
            message: Some("v1.0".to_string()),
        }
    );

    let from_branch = RefCommit::from_branch(&json!({
        "name": "main",
        "commit": {"sha": "abc", "commit": {"message": "head"}}
    }));
    assert_eq!(from_branch.sha.as_deref(), Some("abc"));
    assert_eq!(from_branch.message.as_deref(), Some("head"));
}

#[test]
fn test_organization_url_prefers_html_url() {
    let org = Organization::from(json!({
        "login": "acme",
        "url": "https://gitee.com/api/v5/orgs/acme",
        "html_url": "https://gitee.com/acme"
    }));
    assert_eq!(org.url.as_deref(), Some("https://gitee.com/acme"));
}

#[test]
fn test_ensured_repo_display() {
    let ensured = EnsuredRepo {
        url: "https://gitee.com/acme/demo".to_string(),
        is_new_created: true,
    };
    let text = ensured.to_string();
    assert!(text.contains("https://gitee.com/acme/demo"));
}
