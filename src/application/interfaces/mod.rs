/// Branch service interface
pub mod branch;
/// Commit and tag service interface
pub mod commit;
/// Fork service interface
pub mod fork;
/// Organization and user service interface
pub mod organization;
/// Repository service interface
pub mod repository;
/// Webhook service interface
pub mod webhook;
