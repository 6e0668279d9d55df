/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::{RawBranch, RawCommit, RawRelease, RawTag};
use crate::presentation::serialization::from_source;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A commit
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Commit {
    /// Commit sha
    pub sha: Option<String>,
    /// Full commit message
    pub message: Option<String>,
    /// Author name
    pub author_name: Option<String>,
    /// Author email
    pub author_email: Option<String>,
    /// Author date (ISO 8601, as sent by Gitee)
    pub date: Option<String>,
    /// Web URL of the commit
    pub url: Option<String>,
    /// Raw provider response
    pub source: Value,
}

impl From<Value> for Commit {
    fn from(source: Value) -> Self {
        let raw: RawCommit = from_source(&source);
        let detail = raw.commit.unwrap_or_default();
        let author = detail.author.unwrap_or_default();
        Commit {
            sha: raw.sha,
            message: detail.message,
            author_name: author.name,
            author_email: author.email,
            date: author.date,
            url: raw.html_url,
            source,
        }
    }
}

/// The commit a reference resolves to
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefCommit {
    /// Commit sha (for tags, the release's `target_commitish`)
    pub sha: Option<String>,
    /// Commit message (for tags, the tag name)
    pub message: Option<String>,
}

impl RefCommit {
    /// Reads a release-by-tag payload
    pub fn from_release(source: &Value) -> Self {
        let raw: RawRelease = from_source(source);
        RefCommit {
            sha: raw.target_commitish,
            message: raw.tag_name,
        }
    }

    /// Reads a branch payload
    pub fn from_branch(source: &Value) -> Self {
        let raw: RawBranch = from_source(source);
        let commit = raw.commit.unwrap_or_default();
        RefCommit {
            sha: commit.sha,
            message: commit.commit.and_then(|c| c.message),
        }
    }
}

/// A lightweight or annotated tag
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    /// Tag name
    pub name: Option<String>,
    /// Tagged commit sha
    pub sha: Option<String>,
    /// Annotation message, if any
    pub message: Option<String>,
    /// Raw provider response
    pub source: Value,
}

impl From<Value> for Tag {
    fn from(source: Value) -> Self {
        let raw: RawTag = from_source(&source);
        Tag {
            name: raw.name,
            sha: raw.commit.and_then(|c| c.sha),
            message: raw.message,
            source,
        }
    }
}
