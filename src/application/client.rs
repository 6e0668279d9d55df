/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the Gitee REST API
//!
//! The client owns an authenticated [`HttpClient`] and implements every
//! service trait in [`crate::application::interfaces`].
//!
//! # Example
//! ```ignore
//! use gitee_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let repo = client.get_repo("acme", "demo").await?;
//! ```

use crate::application::config::Config;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::ListOptions;
use std::borrow::Cow;
use std::sync::Arc;

/// Client for the Gitee REST API v5
pub struct Client {
    http_client: Arc<HttpClient>,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client
    ///
    /// # Arguments
    /// * `config` - Configuration containing the access token and API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the access token is blank or the HTTP client
    ///   cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        if config.credentials.access_token.trim().is_empty() {
            return Err(AppError::Config("access token must not be empty".to_string()));
        }
        let config = Arc::new(config);
        let http_client = Arc::new(HttpClient::new(config.clone())?);
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Gets the underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// List options built from the configured defaults
    pub fn list_options(&self) -> ListOptions {
        ListOptions::from_config(&self.config.list)
    }

    /// Web URL of `owner/repo`
    pub fn repo_url(&self, owner: &str, repo: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.rest_api.web_url.trim_end_matches('/'),
            owner,
            repo
        )
    }
}

/// Percent-encodes one caller-supplied path segment
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// API path of `owner/repo`
pub(crate) fn repo_path(owner: &str, repo: &str) -> String {
    format!("/repos/{}/{}", segment(owner), segment(repo))
}
