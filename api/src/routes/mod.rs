//! Route handlers and the state they share

pub mod auth;
pub mod orders;

use std::sync::Arc;

use tg_core::errors::DomainResult;
use tg_core::repositories::{OrderRepository, RevocationStore, UserDirectory};
use tg_core::services::{AuthService, AuthServiceConfig, OrderService};

/// Auth service over trait-object backends chosen at startup
pub type GatewayAuthService = AuthService<dyn UserDirectory, dyn RevocationStore>;

/// Order service over a trait-object repository
pub type GatewayOrderService = OrderService<dyn OrderRepository>;

/// Application state shared by every worker
pub struct AppState {
    pub auth: Arc<GatewayAuthService>,
    pub orders: Arc<GatewayOrderService>,
    /// Log rejected bearer tokens at info level
    pub log_token_failures: bool,
}

impl AppState {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        store: Arc<dyn RevocationStore>,
        orders: Arc<dyn OrderRepository>,
        config: AuthServiceConfig,
    ) -> DomainResult<Self> {
        Ok(Self {
            auth: Arc::new(AuthService::new(directory, store, config)?),
            orders: Arc::new(OrderService::new(orders)),
            log_token_failures: false,
        })
    }

    pub fn with_token_failure_logging(mut self, enabled: bool) -> Self {
        self.log_token_failures = enabled;
        self
    }
}
