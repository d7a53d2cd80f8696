//! Token pair issuance and refresh.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::{RevocationStore, UserDirectory};
use crate::services::revocation::RevocationRegistry;

use super::codec::{ClaimsDraft, TokenCodec};
use super::config::TokenServiceConfig;

/// Marker written when a refresh token is consumed by rotation
const ROTATED_MARKER: &str = "rotated";

/// Dependency name reported when the directory cannot answer
pub const USER_DIRECTORY_NAME: &str = "user-directory";

/// Issues access/refresh pairs and exchanges refresh tokens for new access tokens
pub struct TokenIssuer<D, S>
where
    D: ?Sized + UserDirectory,
    S: ?Sized + RevocationStore,
{
    codec: Arc<TokenCodec>,
    directory: Arc<D>,
    registry: Arc<RevocationRegistry<S>>,
    config: TokenServiceConfig,
}

impl<D, S> TokenIssuer<D, S>
where
    D: ?Sized + UserDirectory,
    S: ?Sized + RevocationStore,
{
    pub fn new(
        codec: Arc<TokenCodec>,
        directory: Arc<D>,
        registry: Arc<RevocationRegistry<S>>,
        config: TokenServiceConfig,
    ) -> Self {
        Self {
            codec,
            directory,
            registry,
            config,
        }
    }

    /// Whether refresh hands out a new refresh token
    pub fn rotates_refresh_tokens(&self) -> bool {
        self.config.rotate_refresh_tokens
    }

    /// Issues a fresh pair for `identity`
    ///
    /// The access token embeds name, roles and permissions; the refresh
    /// token carries only the subject.
    pub fn issue(&self, identity: &Identity) -> Result<TokenPair, TokenError> {
        let access_token = self.issue_access(identity)?;
        let refresh_token = self.codec.encode(
            ClaimsDraft::refresh(&identity.subject_id),
            self.config.refresh_token_ttl,
        )?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_ttl.num_seconds(),
        ))
    }

    fn issue_access(&self, identity: &Identity) -> Result<String, TokenError> {
        self.codec
            .encode(ClaimsDraft::access(identity), self.config.access_token_ttl)
    }

    /// Exchanges a refresh token for a new access token
    ///
    /// Roles and permissions are re-read from the directory so changes take
    /// effect at the next refresh. Any failure yields
    /// [`TokenError::InvalidRefreshToken`]; the detail is only logged.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, TokenError> {
        self.try_refresh(refresh_token).await.map_err(|reason| {
            debug!(reason = %reason, "Refresh rejected");
            TokenError::InvalidRefreshToken
        })
    }

    async fn try_refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self.codec.decode_refresh(refresh_token)?;
        if let Some(jti) = claims.jti.as_deref() {
            if self.registry.is_revoked(jti).await? {
                return Err(TokenError::Revoked.into());
            }
        }
        let identity = self.resolve_identity(&claims.sub).await?;
        let access_token = self.issue_access(&identity)?;

        let refresh_token = if self.config.rotate_refresh_tokens {
            self.rotate(&claims).await?
        } else {
            refresh_token.to_string()
        };

        info!(sub = %claims.sub, "Access token refreshed");
        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_ttl.num_seconds(),
        ))
    }

    /// Consumes the presented refresh token and signs a replacement
    async fn rotate(&self, claims: &Claims) -> DomainResult<String> {
        // Without a jti the token cannot be marked used, so it cannot be rotated.
        if claims.jti.is_none() {
            return Err(TokenError::InvalidRefreshToken.into());
        }
        self.registry.revoke_claims(claims, ROTATED_MARKER).await?;

        Ok(self.codec.encode(
            ClaimsDraft::refresh(&claims.sub),
            self.config.refresh_token_ttl,
        )?)
    }

    async fn resolve_identity(&self, subject_id: &str) -> DomainResult<Identity> {
        let lookup = tokio::time::timeout(
            self.config.directory_timeout,
            self.directory.find_by_id(subject_id),
        )
        .await
        .map_err(|_| DomainError::store_unavailable(USER_DIRECTORY_NAME))??;

        lookup
            .map(|user| user.identity())
            .ok_or(DomainError::NotFound {
                resource: "User".to_string(),
            })
    }
}
