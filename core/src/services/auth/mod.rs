//! Authentication service module
//!
//! Login, refresh, logout and identity lookup on top of the credential
//! verifier, the token issuer and the revocation registry.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, LogoutOutcome};
