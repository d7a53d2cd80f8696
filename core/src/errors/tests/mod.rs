//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, TokenError};

#[test]
fn test_token_error_bridges_into_domain_error() {
    let error: DomainError = TokenError::Expired.into();
    assert!(matches!(error, DomainError::Token(TokenError::Expired)));
    assert_eq!(error.to_string(), "Token expired");
}

#[test]
fn test_auth_path_errors_are_classified() {
    assert!(DomainError::from(TokenError::SignatureInvalid).is_auth_failure());
    assert!(DomainError::from(AuthError::InvalidCredentials).is_auth_failure());
    assert!(DomainError::store_unavailable("revocation-store").is_auth_failure());
    assert!(DomainError::Unauthorized.is_auth_failure());

    assert!(!DomainError::Forbidden.is_auth_failure());
    assert!(!DomainError::NotFound { resource: "Order".to_string() }.is_auth_failure());
}

#[test]
fn test_store_unavailable_names_dependency() {
    let error = DomainError::store_unavailable("user-directory");
    assert_eq!(error.to_string(), "Dependency unavailable: user-directory");
}
