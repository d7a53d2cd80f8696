//! # TokenGate API
//!
//! HTTP surface of the gateway: the authentication middleware chain, the
//! login/refresh/logout/whoami routes and the order service behind them.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
