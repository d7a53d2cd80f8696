//! Main authentication service implementation

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{AccessGrant, TokenPair};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{RevocationStore, UserDirectory};
use crate::services::credentials::CredentialVerifier;
use crate::services::revocation::RevocationRegistry;
use crate::services::token::{TokenCodec, TokenIssuer, USER_DIRECTORY_NAME};

use super::config::AuthServiceConfig;

/// Marker stored against tokens revoked by logout
const LOGOUT_MARKER: &str = "logout";

/// What a logout request actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// The presented token is now on the denylist
    Revoked,
    /// No usable token was presented; nothing changed
    NothingToRevoke,
}

/// Authentication service for the complete token lifecycle
pub struct AuthService<D, S>
where
    D: ?Sized + UserDirectory,
    S: ?Sized + RevocationStore,
{
    /// User directory, also used for whoami
    directory: Arc<D>,
    verifier: CredentialVerifier<D>,
    issuer: TokenIssuer<D, S>,
    codec: Arc<TokenCodec>,
    registry: Arc<RevocationRegistry<S>>,
    config: AuthServiceConfig,
}

impl<D, S> AuthService<D, S>
where
    D: ?Sized + UserDirectory,
    S: ?Sized + RevocationStore,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `directory` - Source of accounts, roles and permissions
    /// * `store` - Backing store of the revocation denylist
    /// * `config` - Service configuration
    pub fn new(directory: Arc<D>, store: Arc<S>, config: AuthServiceConfig) -> DomainResult<Self> {
        let codec = Arc::new(TokenCodec::from_config(&config.token));
        let registry = Arc::new(RevocationRegistry::new(store, config.revocation_timeout));
        let verifier =
            CredentialVerifier::new(directory.clone(), config.directory_timeout, config.bcrypt_cost)?;
        let issuer = TokenIssuer::new(
            codec.clone(),
            directory.clone(),
            registry.clone(),
            config.token.clone(),
        );

        Ok(Self {
            directory,
            verifier,
            issuer,
            codec,
            registry,
            config,
        })
    }

    /// Codec shared with the gateway
    pub fn codec(&self) -> Arc<TokenCodec> {
        self.codec.clone()
    }

    /// Registry shared with the gateway
    pub fn registry(&self) -> Arc<RevocationRegistry<S>> {
        self.registry.clone()
    }

    /// Verifies credentials and issues a token pair
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<TokenPair> {
        let identity = self.verifier.verify(username, password).await?;
        let pair = self.issuer.issue(&identity)?;
        info!(sub = %identity.subject_id, "User logged in");
        Ok(pair)
    }

    /// Exchanges a refresh token for a new access token
    ///
    /// The grant carries a new refresh token only when rotation is enabled.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AccessGrant> {
        let pair = self.issuer.refresh(refresh_token).await?;
        Ok(AccessGrant::from_pair(
            pair,
            self.issuer.rotates_refresh_tokens(),
        ))
    }

    /// Revokes the presented access token, and the refresh token if one is given
    ///
    /// An absent or invalid access token is not an error. A store failure is,
    /// since the caller would otherwise believe the token is dead.
    pub async fn logout(
        &self,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> DomainResult<LogoutOutcome> {
        let claims = match access_token.map(|token| self.codec.decode_access(token)) {
            Some(Ok(claims)) => claims,
            Some(Err(e)) => {
                debug!(reason = %e, "Logout with unusable token ignored");
                return Ok(LogoutOutcome::NothingToRevoke);
            }
            None => return Ok(LogoutOutcome::NothingToRevoke),
        };

        if claims.jti.is_none() {
            debug!(sub = %claims.sub, "Logout with token lacking jti ignored");
            return Ok(LogoutOutcome::NothingToRevoke);
        }
        self.registry.revoke_claims(&claims, LOGOUT_MARKER).await?;

        // Only a refresh token belonging to the same subject is revoked.
        if let Some(refresh) = refresh_token.and_then(|t| self.codec.decode_refresh(t).ok()) {
            if refresh.sub == claims.sub {
                self.registry.revoke_claims(&refresh, LOGOUT_MARKER).await?;
            }
        }

        info!(sub = %claims.sub, "User logged out");
        Ok(LogoutOutcome::Revoked)
    }

    /// Current directory view of `subject_id`
    ///
    /// A subject that no longer exists is unauthorized.
    pub async fn whoami(&self, subject_id: &str) -> DomainResult<Identity> {
        let user = tokio::time::timeout(
            self.config.directory_timeout,
            self.directory.find_by_id(subject_id),
        )
        .await
        .map_err(|_| DomainError::store_unavailable(USER_DIRECTORY_NAME))??;

        user.map(|u| u.identity()).ok_or(DomainError::Unauthorized)
    }
}
