//! Configuration for the token service

use chrono::Duration;
use tg_shared::config::{JwtConfig, MAX_TOKEN_LIFETIME_SECS};

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS};

/// Configuration for the token codec and issuer
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Value stamped into and required of `iss`
    pub issuer: String,
    /// Value stamped into and required of `aud`
    pub audience: String,
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_token_ttl: Duration,
    /// Hand out a new refresh token on every refresh and revoke the old one
    pub rotate_refresh_tokens: bool,
    /// Upper bound on a directory lookup during refresh
    pub directory_timeout: std::time::Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            issuer: "AuthService".to_string(),
            audience: "ApiGateway".to_string(),
            access_token_ttl: Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
            refresh_token_ttl: Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
            rotate_refresh_tokens: false,
            directory_timeout: std::time::Duration::from_millis(1000),
        }
    }
}

impl TokenServiceConfig {
    pub fn with_directory_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.directory_timeout = timeout;
        self
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            issuer: jwt.issuer.clone(),
            audience: jwt.audience.clone(),
            access_token_ttl: lifetime(jwt.access_token_expiry),
            refresh_token_ttl: lifetime(jwt.refresh_token_expiry),
            rotate_refresh_tokens: jwt.rotate_refresh_tokens,
            ..Default::default()
        }
    }
}

/// Clamped to the range `AppConfig::validate` accepts
fn lifetime(secs: i64) -> Duration {
    Duration::seconds(secs.clamp(0, MAX_TOKEN_LIFETIME_SECS))
}
