/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Declared schemas of the Gitee payloads this crate reads.
//!
//! Only the fields that feed the normalized records are declared, and every
//! one is optional so a partial or oddly-typed payload still decodes.

use crate::presentation::serialization::{
    lenient, option_string_empty_as_none, string_as_bool_opt, u64_or_string_opt,
};
use serde::Deserialize;

/// Owner (user or namespace) embedded in repository payloads
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawOwner {
    #[serde(default, deserialize_with = "u64_or_string_opt")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub login: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub html_url: Option<String>,
}

/// `GET /repos/{owner}/{repo}` and every repository list
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawRepository {
    #[serde(default, deserialize_with = "u64_or_string_opt")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_as_bool_opt")]
    pub private: Option<bool>,
    #[serde(default, deserialize_with = "string_as_bool_opt")]
    pub fork: Option<bool>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub default_branch: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub owner: Option<RawOwner>,
    #[serde(default, deserialize_with = "lenient")]
    pub namespace: Option<RawNamespace>,
}

/// Namespace block of a repository payload
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawNamespace {
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub path: Option<String>,
}

/// Author/committer signature inside a commit
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawSignature {
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub date: Option<String>,
}

/// The git-level part of a commit payload (`commit.commit`)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawCommitDetail {
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<RawSignature>,
    #[serde(default, deserialize_with = "lenient")]
    pub committer: Option<RawSignature>,
}

/// `GET /repos/{owner}/{repo}/commits[/{sha}]`, also embedded in branches
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawCommit {
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub sha: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub commit: Option<RawCommitDetail>,
}

/// `GET /repos/{owner}/{repo}/branches[/{branch}]`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawBranch {
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_as_bool_opt")]
    pub protected: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub commit: Option<RawCommit>,
}

/// `GET /repos/{owner}/{repo}/releases/tags/{tag}`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawRelease {
    #[serde(default, deserialize_with = "u64_or_string_opt")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub tag_name: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub target_commitish: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub name: Option<String>,
}

/// Commit reference inside a tag payload
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawTagCommit {
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub sha: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub date: Option<String>,
}

/// `GET /repos/{owner}/{repo}/tags`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawTag {
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub commit: Option<RawTagCommit>,
}

/// `GET /repos/{owner}/{repo}/hooks[/{id}]`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawWebhook {
    #[serde(default, deserialize_with = "u64_or_string_opt")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "string_as_bool_opt")]
    pub push_events: Option<bool>,
    #[serde(default, deserialize_with = "string_as_bool_opt")]
    pub tag_push_events: Option<bool>,
    #[serde(default, deserialize_with = "string_as_bool_opt")]
    pub merge_requests_events: Option<bool>,
    #[serde(default, deserialize_with = "string_as_bool_opt")]
    pub issues_events: Option<bool>,
    #[serde(default, deserialize_with = "string_as_bool_opt")]
    pub note_events: Option<bool>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub created_at: Option<String>,
}

/// `GET /orgs/{org}` and `GET /user/orgs`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawOrganization {
    #[serde(default, deserialize_with = "u64_or_string_opt")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub login: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub description: Option<String>,
}

/// `GET /user`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawUser {
    #[serde(default, deserialize_with = "u64_or_string_opt")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub login: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "option_string_empty_as_none")]
    pub html_url: Option<String>,
}
