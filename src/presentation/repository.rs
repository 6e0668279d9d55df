/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::RawRepository;
use crate::presentation::serialization::from_source;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A repository as returned by Gitee
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    /// Numeric repository id
    pub id: Option<u64>,
    /// Display name
    pub name: Option<String>,
    /// `owner/path`
    pub full_name: Option<String>,
    /// Web URL of the repository
    pub url: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Whether the repository is private
    pub private: bool,
    /// Whether the repository is a fork
    pub fork: bool,
    /// Default branch name
    pub default_branch: Option<String>,
    /// Login of the owner
    pub owner: Option<String>,
    /// Raw provider response
    pub source: Value,
}

impl From<Value> for Repository {
    fn from(source: Value) -> Self {
        let raw: RawRepository = from_source(&source);
        let owner = raw
            .owner
            .as_ref()
            .and_then(|o| o.login.clone())
            .or_else(|| raw.namespace.as_ref().and_then(|n| n.path.clone()));
        Repository {
            id: raw.id,
            name: raw.name,
            full_name: raw.full_name,
            url: raw.html_url,
            description: raw.description,
            private: raw.private.unwrap_or(false),
            fork: raw.fork.unwrap_or(false),
            default_branch: raw.default_branch,
            owner,
            source,
        }
    }
}

/// A fork created from, or listed under, another repository
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Fork {
    /// Numeric repository id of the fork
    pub id: Option<u64>,
    /// `owner/path` of the fork
    pub full_name: Option<String>,
    /// Web URL of the fork
    pub url: Option<String>,
    /// Login of the fork's owner
    pub owner: Option<String>,
    /// Raw provider response
    pub source: Value,
}

impl From<Value> for Fork {
    fn from(source: Value) -> Self {
        let raw: RawRepository = from_source(&source);
        Fork {
            id: raw.id,
            full_name: raw.full_name,
            url: raw.html_url,
            owner: raw.owner.and_then(|o| o.login),
            source,
        }
    }
}

/// Result of an existence check
#[derive(Debug, Clone, Copy, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoExistence {
    /// `false` when the repository is missing or could not be read
    pub is_exist: bool,
}

/// Result of an emptiness check
#[derive(Debug, Clone, Copy, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoEmptiness {
    /// `true` when the repository has no commits
    pub is_empty: bool,
}

/// Result of `ensure_empty_repo`
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnsuredRepo {
    /// Web URL of the repository
    pub url: String,
    /// Whether the repository was created by this call
    pub is_new_created: bool,
}
