//! Revocation store trait: a TTL-capable key/value denylist.

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::DomainError;

/// Key/value store with per-key expiry backing the revocation denylist
///
/// Implementations must give read-your-writes on a single key: once
/// `set_with_ttl` returns, `exists` on the same key from any caller must
/// observe it. Entries vanish on their own when the ttl elapses.
///
/// Every error returned here is treated by callers as "store unavailable".
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Key present and not yet expired
    /// * `Ok(None)` - Key absent or expired
    /// * `Err(DomainError)` - Store could not be reached
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Store `value` under `key`, expiring after `ttl`
    ///
    /// Overwrites any existing entry; the last write wins.
    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration)
        -> Result<(), DomainError>;

    /// Whether `key` is present and not yet expired
    async fn exists(&self, key: &str) -> Result<bool, DomainError>;

    /// Remove `key`
    ///
    /// # Returns
    /// * `Ok(true)` - Key was present and removed
    /// * `Ok(false)` - Key was absent
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;
}
