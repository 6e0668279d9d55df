/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::RawBranch;
use crate::presentation::serialization::from_source;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A branch and the commit it points at
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Branch {
    /// Branch name
    pub name: Option<String>,
    /// Head commit sha
    pub sha: Option<String>,
    /// Whether the branch is protected
    pub protected: bool,
    /// Raw provider response
    pub source: Value,
}

impl From<Value> for Branch {
    fn from(source: Value) -> Self {
        let raw: RawBranch = from_source(&source);
        Branch {
            name: raw.name,
            sha: raw.commit.and_then(|c| c.sha),
            protected: raw.protected.unwrap_or(false),
            source,
        }
    }
}

/// Protection status of a branch
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ProtectedBranch {
    /// Branch name
    pub name: Option<String>,
    /// Whether the branch is protected
    pub protected: bool,
    /// Raw provider response
    pub source: Value,
}

impl From<Value> for ProtectedBranch {
    fn from(source: Value) -> Self {
        let raw: RawBranch = from_source(&source);
        ProtectedBranch {
            name: raw.name,
            protected: raw.protected.unwrap_or(false),
            source,
        }
    }
}
