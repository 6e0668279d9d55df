/// Gitee API client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces (traits)
pub mod interfaces;
/// Service implementations for the client
pub mod services;
