use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;

use tg_api::config::Config;
use tg_api::{create_app, AppState};
use tg_infra::{build_revocation_store, InMemoryOrderRepository, InMemoryUserDirectory};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
            error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    // Initialize logger; RUST_LOG wins over the configured level
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting TokenGate ({})", config.environment);

    let store = build_revocation_store(&config.cache)
        .await
        .map_err(|e| startup_error("revocation store", e))?;

    let directory = InMemoryUserDirectory::with_seed_users(config.directory.bcrypt_cost)
        .map_err(|e| startup_error("user directory", e))?;
    let orders = InMemoryOrderRepository::with_seed_orders();

    let state = AppState::new(
        Arc::new(directory),
        store,
        Arc::new(orders),
        config.auth_service_config(),
    )
    .map_err(|e| startup_error("auth service", e))?
    .with_token_failure_logging(config.log_token_failures());
    let state = web::Data::new(state);

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}

fn startup_error(component: &str, e: impl std::fmt::Display) -> std::io::Error {
    error!("Failed to initialize {}: {}", component, e);
    std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("failed to initialize {}: {}", component, e),
    )
}
