//! Repository interfaces for the stores the domain depends on.
//!
//! Implementations live in `tg_infra`; the `Mock*` types back unit tests.

pub mod order;
pub mod revocation;
pub mod user;

pub use order::OrderRepository;
pub use revocation::RevocationStore;
pub use user::UserDirectory;

#[cfg(test)]
pub use order::MockOrderRepository;
#[cfg(test)]
pub use revocation::MockRevocationStore;
#[cfg(test)]
pub use user::MockUserDirectory;
