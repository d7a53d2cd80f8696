pub mod auth;
pub mod gateway;
pub mod request_log;

pub use auth::*;
pub use gateway::Gateway;
pub use request_log::{RequestId, RequestIdExt, RequestLogging};
