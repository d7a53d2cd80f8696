//! Redis-backed revocation store

use async_trait::async_trait;
use std::time::Duration;

use tg_core::errors::DomainError;
use tg_core::repositories::RevocationStore;

use super::redis_client::RedisClient;

/// Revocation denylist stored in Redis with native key expiry
///
/// Keys pass through [`CacheConfig::make_key`](tg_shared::config::CacheConfig::make_key)
/// so several deployments can share one Redis.
#[derive(Clone)]
pub struct RedisRevocationStore {
    client: RedisClient,
}

impl RedisRevocationStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key(&self, key: &str) -> String {
        self.client.config().make_key(key)
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.client.get(&self.key(key)).await?)
    }

    async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        // Redis expiry has one-second resolution; round up so an entry never
        // disappears before the token it guards.
        let seconds = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
        if seconds == 0 {
            return Ok(());
        }
        Ok(self
            .client
            .set_with_expiry(&self.key(key), value, seconds)
            .await?)
    }

    async fn exists(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.client.exists(&self.key(key)).await?)
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.client.delete(&self.key(key)).await?)
    }
}
