//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - HS256 signing and verification with zero clock skew
//! - Access/refresh pair issuance
//! - Refresh with identity re-resolution and optional rotation

mod codec;
mod config;
mod issuer;


pub use codec::{ClaimsDraft, TokenCodec};
pub use config::TokenServiceConfig;
pub use issuer::{TokenIssuer, USER_DIRECTORY_NAME};
