//! Error types for credential and token operations
//!
//! The detailed variants exist for logging and for callers that need to
//! pattern-match. At the HTTP boundary they all collapse to one 401.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password; the two are indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Token validation and issuance errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    MalformedToken,

    #[error("Invalid signature")]
    SignatureInvalid,

    #[error("Token expired")]
    Expired,

    #[error("Issuer mismatch")]
    IssuerMismatch,

    #[error("Audience mismatch")]
    AudienceMismatch,

    /// A refresh token was presented where an access token is required, or vice versa
    #[error("Unexpected token kind")]
    WrongKind,

    #[error("Token revoked")]
    Revoked,

    /// Opaque outcome of any failed refresh
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    GenerationFailed,
}
