/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Gitee Client
//!
//! An async client for the [Gitee](https://gitee.com) REST API v5.
//!
//! The client covers repositories, branches, commits, tags, webhooks, forks,
//! organizations and branch protection. Every call is authenticated with the
//! configured personal access token, list endpoints are paginated
//! transparently, and each response is normalized into a small record that
//! still carries the raw provider payload in its `source` field.
//!
//! ## Example
//! ```ignore
//! use gitee_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//!
//! let ensured = client.ensure_empty_repo("my-org", "mirror").await?;
//! if ensured.is_new_created {
//!     println!("created {}", ensured.url);
//! }
//!
//! let branches = client
//!     .list_branches("my-org", "mirror", ListOptions::default())
//!     .await?;
//! ```

/// Application layer: configuration, the client and its service traits
pub mod application;

/// Crate-wide constants
pub mod constants;

/// Error type returned by every fallible operation
pub mod error;

/// Transport and wire models
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Normalized output records
pub mod presentation;

/// Environment, logging and validation helpers
pub mod utils;

/// Re-export of the configuration module under a short path
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
