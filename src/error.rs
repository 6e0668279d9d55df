/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the Gitee client
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure (connection, TLS, timeout, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("api error ({status}): {message}")]
    Api {
        /// HTTP status returned by Gitee
        status: StatusCode,
        /// Response body, usually a JSON `{"message": ...}` document
        message: String,
    },

    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parameters rejected before any request was sent
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// `ensure_empty_repo` found a repository that already has commits
    #[error("repository {0} already exists and is not empty")]
    RepoNotEmpty(String),

    /// The client could not be built from its configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Status code of an [`AppError::Api`] error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the provider reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
