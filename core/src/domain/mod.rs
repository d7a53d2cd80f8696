//! Domain layer containing identities, token claims and revocation entries.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
