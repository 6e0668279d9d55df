/// Branch and branch protection records
pub mod branch;
/// Commit, reference and tag records
pub mod commit;
/// Organization and user records
pub mod organization;
/// Repository, fork and repository-check records
pub mod repository;
/// Serialization utilities for API responses
pub mod serialization;
/// Webhook records
pub mod webhook;
