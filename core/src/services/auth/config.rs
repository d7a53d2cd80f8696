//! Configuration for the authentication service

use std::time::Duration;
use tg_shared::config::AppConfig;

use crate::services::token::TokenServiceConfig;

/// Configuration for [`AuthService`](super::AuthService)
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Token lifetimes, signing secret and rotation
    pub token: TokenServiceConfig,
    /// Upper bound on a single revocation store call
    pub revocation_timeout: Duration,
    /// Upper bound on a single directory lookup
    pub directory_timeout: Duration,
    /// bcrypt cost of the dummy hash used for unknown users
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            token: TokenServiceConfig::default(),
            revocation_timeout: Duration::from_millis(500),
            directory_timeout: Duration::from_millis(1000),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&AppConfig> for AuthServiceConfig {
    fn from(config: &AppConfig) -> Self {
        let directory_timeout = Duration::from_millis(config.directory.lookup_timeout_ms);
        Self {
            token: TokenServiceConfig::from(&config.auth.jwt)
                .with_directory_timeout(directory_timeout),
            revocation_timeout: Duration::from_millis(config.cache.operation_timeout_ms),
            directory_timeout,
            bcrypt_cost: config.directory.bcrypt_cost,
        }
    }
}
