/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::{RawOrganization, RawUser};
use crate::presentation::serialization::from_source;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An organization
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    /// Numeric id
    pub id: Option<u64>,
    /// Organization path used in URLs
    pub login: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Web URL, or the API URL when no web URL is given
    pub url: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Raw provider response
    pub source: Value,
}

impl From<Value> for Organization {
    fn from(source: Value) -> Self {
        let raw: RawOrganization = from_source(&source);
        Organization {
            id: raw.id,
            login: raw.login,
            name: raw.name,
            url: raw.html_url.or(raw.url),
            description: raw.description,
            source,
        }
    }
}

/// A Gitee user
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Numeric id
    pub id: Option<u64>,
    /// Login
    pub login: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Profile URL
    pub url: Option<String>,
    /// Raw provider response
    pub source: Value,
}

impl From<Value> for User {
    fn from(source: Value) -> Self {
        let raw: RawUser = from_source(&source);
        User {
            id: raw.id,
            login: raw.login,
            name: raw.name,
            url: raw.html_url,
            source,
        }
    }
}
