//! User directory trait: read-only lookup of login accounts.

use async_trait::async_trait;

use crate::domain::entities::user::UserRecord;
use crate::errors::DomainError;

/// Read-only access to the accounts that can authenticate
///
/// The directory is the source of truth for roles and permissions; token
/// refresh re-resolves through it instead of trusting embedded claims.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use tg_core::repositories::UserDirectory;
/// use tg_core::domain::entities::UserRecord;
/// use tg_core::errors::DomainError;
///
/// struct LdapDirectory;
///
/// #[async_trait]
/// impl UserDirectory for LdapDirectory {
///     async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, DomainError> {
///         Ok(None)
///     }
///
///     async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, DomainError> {
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find an account by its login name
    ///
    /// # Returns
    /// * `Ok(Some(UserRecord))` - Account found
    /// * `Ok(None)` - No account with that name
    /// * `Err(DomainError)` - Directory could not be reached
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, DomainError>;

    /// Find an account by its stable id (the token subject)
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, DomainError>;
}
