//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing and token lifetime configuration
//! - `cache` - Revocation store (Redis) configuration
//! - `directory` - User directory lookup and password hashing configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration

pub mod auth;
pub mod cache;
pub mod directory;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, MAX_TOKEN_LIFETIME_SECS};
pub use cache::{CacheConfig, RevocationBackend};
pub use directory::DirectoryConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Revocation store configuration
    pub cache: CacheConfig,

    /// User directory configuration
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            cache: CacheConfig::default(),
            directory: DirectoryConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env(),
            cache: CacheConfig::from_env(),
            directory: DirectoryConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Checks settings that must never reach production with their defaults.
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err("JWT_SECRET must be set in production".to_string());
        }
        if self.auth.jwt.secret.len() < 32 && self.environment.is_production() {
            return Err("JWT_SECRET must be at least 32 bytes in production".to_string());
        }
        let lifetimes = [
            self.auth.jwt.access_token_expiry,
            self.auth.jwt.refresh_token_expiry,
        ];
        if lifetimes.iter().any(|&secs| secs <= 0) {
            return Err("token lifetimes must be positive".to_string());
        }
        if lifetimes.iter().any(|&secs| secs > MAX_TOKEN_LIFETIME_SECS) {
            return Err(format!(
                "token lifetimes must not exceed {MAX_TOKEN_LIFETIME_SECS} seconds"
            ));
        }
        Ok(())
    }
}
