//! # Infrastructure Layer
//!
//! Concrete backends for the repository traits defined in `tg_core`:
//!
//! - **Cache**: Redis and in-memory revocation stores
//! - **Directory**: in-memory user directory with bcrypt-hashed seed accounts
//! - **Orders**: in-memory order repository for the demonstration service

use std::sync::Arc;

use tg_core::errors::DomainError;
use tg_core::repositories::RevocationStore;
use tg_shared::config::{CacheConfig, RevocationBackend};

/// Cache module - Redis client and revocation stores
pub mod cache;

/// Directory module - user accounts
pub mod directory;

/// Orders module - demonstration order storage
pub mod orders;

pub use cache::{InMemoryRevocationStore, RedisClient, RedisRevocationStore};
pub use directory::InMemoryUserDirectory;
pub use orders::InMemoryOrderRepository;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Cache(e) => {
                tracing::debug!("Mapping cache error to store unavailable: {}", e);
                DomainError::store_unavailable("redis")
            }
            InfrastructureError::General(message) => {
                tracing::debug!("Mapping infrastructure error to store unavailable: {}", message);
                DomainError::store_unavailable("redis")
            }
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}

/// Builds the revocation store selected by `config.backend`
///
/// The Redis backend connects eagerly and fails if Redis cannot be reached.
pub async fn build_revocation_store(
    config: &CacheConfig,
) -> Result<Arc<dyn RevocationStore>, InfrastructureError> {
    match config.backend {
        RevocationBackend::Redis => {
            // Two quick attempts per call keep retries inside the registry's timeout.
            let client = RedisClient::new_with_retry_config(config.clone(), 2, 50).await?;
            tracing::info!("Using Redis revocation store");
            Ok(Arc::new(RedisRevocationStore::new(client)))
        }
        RevocationBackend::Memory => {
            tracing::warn!("Using in-memory revocation store; revocations are not shared between instances");
            Ok(Arc::new(InMemoryRevocationStore::new()))
        }
    }
}
