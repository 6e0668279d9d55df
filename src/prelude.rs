/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Gitee Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the Gitee Client library.
//!
//! ## Usage
//!
//! ```rust
//! use gitee_client::prelude::*;
//!
//! let config = Config::with_token("token", "https://gitee.com/api/v5");
//! let client = Client::new(config).unwrap();
//! let options = ListOptions::new().with_per_page(50);
//! # let _ = (client, options);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Gitee API client
pub use crate::config::{Config, Credentials, ListDefaults, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Gitee API client
pub use crate::application::client::Client;

/// Low-level authenticated HTTP client
pub use crate::model::http::HttpClient;

/// Service traits implemented by [`Client`]
pub use crate::application::services::{
    BranchService, CommitService, ForkService, OrganizationService, RepositoryService,
    WebhookService,
};

// ============================================================================
// REQUEST MODELS
// ============================================================================

/// Request parameters
pub use crate::model::requests::{
    CreateBranchRequest, CreateForkRequest, CreateRepoRequest, GitRef, ListCommitsRequest,
    ListOptions, WebhookEvents, WebhookRequest,
};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Normalized output records
pub use crate::presentation::branch::{Branch, ProtectedBranch};
pub use crate::presentation::commit::{Commit, RefCommit, Tag};
pub use crate::presentation::organization::{Organization, User};
pub use crate::presentation::repository::{
    EnsuredRepo, Fork, RepoEmptiness, RepoExistence, Repository,
};
pub use crate::presentation::webhook::Webhook;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Re-export serde for convenience
pub use serde::{Deserialize, Serialize};
