//! Timeout-bounded access to the revocation store.

use chrono::{Duration as ChronoDuration, Utc};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::domain::entities::revocation::{RevocationEntry, DEFAULT_REVOCATION_MARKER};
use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::RevocationStore;

/// Dependency name reported when the store cannot answer
pub const REVOCATION_STORE_NAME: &str = "revocation-store";

/// Records and checks revoked token ids
///
/// Every store call is bounded by `timeout`. A timeout or store error is
/// reported as [`DomainError::StoreUnavailable`] and callers must treat it as
/// "revoked".
pub struct RevocationRegistry<S: ?Sized + RevocationStore> {
    store: Arc<S>,
    timeout: Duration,
}

impl<S: ?Sized + RevocationStore> RevocationRegistry<S> {
    pub fn new(store: Arc<S>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Revokes `jti` for `remaining_ttl`
    ///
    /// A non-positive ttl means the token is already expired and nothing is
    /// written. Repeated calls overwrite the entry.
    pub async fn revoke(&self, jti: &str, remaining_ttl: ChronoDuration) -> DomainResult<()> {
        self.revoke_with_marker(jti, remaining_ttl, DEFAULT_REVOCATION_MARKER)
            .await
    }

    pub async fn revoke_with_marker(
        &self,
        jti: &str,
        remaining_ttl: ChronoDuration,
        marker: &str,
    ) -> DomainResult<()> {
        let ttl = match remaining_ttl.to_std() {
            Ok(ttl) if !ttl.is_zero() => ttl,
            _ => {
                debug!(jti = %jti, "Token already expired, skipping revocation");
                return Ok(());
            }
        };

        let entry = RevocationEntry::new(jti, ttl).with_marker(marker);
        let key = entry.key();
        self.bounded(
            "set_with_ttl",
            self.store.set_with_ttl(&key, &entry.marker, entry.ttl),
        )
        .await?;

        info!(jti = %jti, ttl_secs = ttl.as_secs(), "Token revoked");
        Ok(())
    }

    /// Revokes the token described by `claims` until its natural expiry
    ///
    /// Tokens without a jti cannot be looked up later, so this is a no-op.
    pub async fn revoke_claims(&self, claims: &Claims, marker: &str) -> DomainResult<()> {
        self.revoke_claims_at(claims, marker, Utc::now().timestamp())
            .await
    }

    pub async fn revoke_claims_at(
        &self,
        claims: &Claims,
        marker: &str,
        now: i64,
    ) -> DomainResult<()> {
        match claims.jti.as_deref() {
            Some(jti) => {
                self.revoke_with_marker(jti, claims.remaining_lifetime_at(now), marker)
                    .await
            }
            None => {
                debug!(sub = %claims.sub, "Token has no jti, nothing to revoke");
                Ok(())
            }
        }
    }

    /// Whether `jti` is on the denylist
    pub async fn is_revoked(&self, jti: &str) -> DomainResult<bool> {
        let key = RevocationEntry::key_for(jti);
        self.bounded("exists", self.store.exists(&key)).await
    }

    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> DomainResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                warn!(operation, error = %e, "Revocation store call failed");
                Err(DomainError::store_unavailable(REVOCATION_STORE_NAME))
            }
            Err(_) => {
                warn!(
                    operation,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Revocation store call timed out"
                );
                Err(DomainError::store_unavailable(REVOCATION_STORE_NAME))
            }
        }
    }
}
