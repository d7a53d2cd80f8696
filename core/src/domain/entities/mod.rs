//! Domain entities representing core business objects.

pub mod identity;
pub mod order;
pub mod revocation;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use identity::Identity;
pub use order::{NewOrderItem, Order, OrderItem, OrderStatus};
pub use revocation::{RevocationEntry, DEFAULT_REVOCATION_MARKER, REVOKED_TOKEN_KEY_PREFIX};
pub use token::{
    AccessGrant, Claims, TokenKind, TokenPair, ACCESS_TOKEN_EXPIRY_MINUTES,
    REFRESH_TOKEN_EXPIRY_DAYS, TOKEN_TYPE_BEARER,
};
pub use user::UserRecord;
