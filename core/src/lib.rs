//! # TokenGate Core
//!
//! Token lifecycle and revocation for the TokenGate gateway.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types; storage backends live in `tg_infra`.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
