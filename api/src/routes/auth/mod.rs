//! Authentication route handlers
//!
//! - Login with username and password
//! - Token refresh
//! - Logout (revokes the presented tokens)
//! - Current identity

pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;

pub use login::login;
pub use logout::logout;
pub use me::me;
pub use refresh::refresh_token;
