//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Forbidden")]
    Forbidden,

    #[error("Unauthorized access")]
    Unauthorized,

    /// An external store or directory could not answer in time
    #[error("Dependency unavailable: {dependency}")]
    StoreUnavailable { dependency: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for a store failure on the named dependency
    pub fn store_unavailable(dependency: impl Into<String>) -> Self {
        DomainError::StoreUnavailable {
            dependency: dependency.into(),
        }
    }

    /// Whether this error arose on the authentication path.
    ///
    /// Every such error is reported to clients as the same 401.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            DomainError::Unauthorized
                | DomainError::StoreUnavailable { .. }
                | DomainError::Auth(_)
                | DomainError::Token(_)
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
