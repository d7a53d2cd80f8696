use std::ops::Deref;

use tg_core::services::AuthServiceConfig;
use tg_shared::config::AppConfig;

/// Startup configuration failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Reads the environment (after `.env` has been loaded) and validates it
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_app_config(AppConfig::from_env())
    }

    pub fn from_app_config(app: AppConfig) -> Result<Self, ConfigError> {
        app.validate().map_err(ConfigError::Invalid)?;
        Ok(Self { app })
    }

    pub fn auth_service_config(&self) -> AuthServiceConfig {
        AuthServiceConfig::from(&self.app)
    }

    pub fn bind_address(&self) -> String {
        self.app.server.bind_address()
    }

    pub fn log_token_failures(&self) -> bool {
        self.app.logging.log_token_failures
    }
}

impl Deref for Config {
    type Target = AppConfig;

    fn deref(&self) -> &AppConfig {
        &self.app
    }
}
