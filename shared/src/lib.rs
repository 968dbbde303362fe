//! Shared utilities and common types for the HyperProf server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the process environment
//! - The JSON error body returned by every API endpoint

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, LogFormat,
    LoggingConfig, RevocationCleanupConfig, ServerConfig, TokenKindConfig,
};
pub use errors::{error_codes, ErrorResponse};
