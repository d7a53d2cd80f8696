//! Revocation registry: the denylist that makes stateless tokens revocable.

mod registry;


pub use registry::{RevocationRegistry, REVOCATION_STORE_NAME};
