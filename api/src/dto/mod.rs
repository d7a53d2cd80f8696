//! Request and response bodies of the HTTP surface

pub mod auth;
pub mod orders;

pub use auth::*;
pub use orders::*;
