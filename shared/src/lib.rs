//! Shared configuration and common types for the TokenGate server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The structured error response returned at the HTTP boundary

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, DirectoryConfig, Environment, JwtConfig,
    LoggingConfig, RevocationBackend, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
