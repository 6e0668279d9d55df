/// Branch service implementation
pub mod branch_service;
/// Commit and tag service implementation
pub mod commit_service;
/// Fork service implementation
pub mod fork_service;
/// Organization and user service implementation
pub mod organization_service;
/// Repository service implementation, including `ensure_empty_repo`
pub mod repository_service;
/// Webhook service implementation
pub mod webhook_service;

pub use crate::application::interfaces::branch::*;
pub use crate::application::interfaces::commit::*;
pub use crate::application::interfaces::fork::*;
pub use crate::application::interfaces::organization::*;
pub use crate::application::interfaces::repository::*;
pub use crate::application::interfaces::webhook::*;
