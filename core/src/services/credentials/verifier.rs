//! bcrypt-based credential verification

use bcrypt::{hash, verify};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::domain::entities::identity::Identity;
use crate::errors::{AuthError, DomainError};
use crate::repositories::UserDirectory;

/// Password hashed at startup and verified against when the user is unknown
const DUMMY_PASSWORD: &str = "tokengate-dummy-password";

/// Verifies a username/password pair and yields the account's identity
///
/// Unknown users, wrong passwords and directory failures all return
/// [`AuthError::InvalidCredentials`], and every path pays for one bcrypt
/// verification so response timing does not reveal which usernames exist.
pub struct CredentialVerifier<D: ?Sized + UserDirectory> {
    directory: Arc<D>,
    lookup_timeout: Duration,
    dummy_hash: String,
}

impl<D: ?Sized + UserDirectory> CredentialVerifier<D> {
    /// Creates a verifier whose dummy hash uses `bcrypt_cost`
    ///
    /// The cost should match the directory's hashes.
    pub fn new(
        directory: Arc<D>,
        lookup_timeout: Duration,
        bcrypt_cost: u32,
    ) -> Result<Self, DomainError> {
        let dummy_hash = hash(DUMMY_PASSWORD, bcrypt_cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to prepare dummy password hash: {}", e),
        })?;

        Ok(Self {
            directory,
            lookup_timeout,
            dummy_hash,
        })
    }

    pub async fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let lookup =
            tokio::time::timeout(self.lookup_timeout, self.directory.find_by_username(username))
                .await;

        let user = match lookup {
            Ok(Ok(user)) => user,
            Ok(Err(e)) => {
                warn!(error = %e, "User directory lookup failed during login");
                None
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.lookup_timeout.as_millis() as u64,
                    "User directory lookup timed out during login"
                );
                None
            }
        };

        let candidate_hash = user
            .as_ref()
            .map(|u| u.password_hash.clone())
            .unwrap_or_else(|| self.dummy_hash.clone());

        let password_ok = check_password(password.to_string(), candidate_hash).await;

        match user {
            Some(user) if password_ok => {
                info!(sub = %user.id, "Credentials verified");
                Ok(user.identity())
            }
            _ => {
                info!(username = %username, "Credential verification failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

/// Runs bcrypt off the async workers; a malformed hash counts as a mismatch
async fn check_password(password: String, password_hash: String) -> bool {
    match tokio::task::spawn_blocking(move || verify(password, &password_hash)).await {
        Ok(Ok(matches)) => matches,
        Ok(Err(e)) => {
            warn!(error = %e, "Stored password hash could not be parsed");
            false
        }
        Err(e) => {
            error!(error = %e, "Password verification task failed");
            false
        }
    }
}
