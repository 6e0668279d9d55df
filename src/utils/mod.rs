/// Environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Input validation applied before any request is sent
pub mod validation;

pub use logger::*;
