//! Business services containing domain logic and use cases.

pub mod auth;
pub mod credentials;
pub mod orders;
pub mod revocation;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, LogoutOutcome};
pub use credentials::CredentialVerifier;
pub use orders::OrderService;
pub use revocation::RevocationRegistry;
pub use token::{ClaimsDraft, TokenCodec, TokenIssuer, TokenServiceConfig};
