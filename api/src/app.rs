//! Application factory
//!
//! Wires the middleware chain and the routes around a prepared [`AppState`].
//! Middleware runs outermost first: access log, correlation id, gateway.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::{InternalError, JsonPayloadError},
    middleware::Logger,
    web, App, Error, HttpRequest, HttpResponse,
};

use tg_shared::{error_codes, ErrorResponse};

use crate::middleware::{Gateway, RequestLogging};
use crate::routes::{auth, orders, AppState};

/// Largest accepted JSON body
const JSON_LIMIT_BYTES: usize = 16 * 1024;

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let gateway = Gateway::new(app_state.auth.codec(), app_state.auth.registry())
        .with_token_failure_logging(app_state.log_token_failures);

    App::new()
        .app_data(app_state)
        .app_data(
            web::JsonConfig::default()
                .limit(JSON_LIMIT_BYTES)
                .error_handler(json_error_handler),
        )
        .wrap(gateway)
        .wrap(RequestLogging)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login))
                        .route("/refresh", web::post().to(auth::refresh_token))
                        .route("/logout", web::post().to(auth::logout))
                        .route("/me", web::get().to(auth::me)),
                )
                .service(
                    web::scope("/orders")
                        .route("", web::get().to(orders::list_orders))
                        .route("", web::post().to(orders::create_order))
                        .route("/{id}", web::get().to(orders::get_order))
                        .route("/{id}", web::delete().to(orders::delete_order))
                        .route("/{id}/status", web::put().to(orders::update_order_status)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "tokengate",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let body = ErrorResponse::new(error_codes::BAD_REQUEST, "Malformed JSON body")
        .add_detail("reason", err.to_string());
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
