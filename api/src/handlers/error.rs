//! Mapping of domain errors onto HTTP responses.
//!
//! Every token, identity and store failure becomes the same bare 401 so a
//! client cannot tell which check it failed. The detailed kind is logged
//! together with the request's correlation id.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use tg_core::errors::{AuthError, DomainError};
use tg_shared::{error_codes, ErrorResponse};

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError, request_id: &str) -> HttpResponse {
    match error {
        DomainError::Auth(AuthError::InvalidCredentials) => {
            log::debug!("[{}] Rejected credentials", request_id);
            HttpResponse::Unauthorized().json(ErrorResponse::new(
                error_codes::INVALID_CREDENTIALS,
                "Invalid username or password",
            ))
        }
        DomainError::Forbidden => {
            log::debug!("[{}] Access denied", request_id);
            HttpResponse::Forbidden().json(ErrorResponse::new(
                error_codes::FORBIDDEN,
                "You do not have permission to access this resource",
            ))
        }
        DomainError::Token(e) => {
            log::debug!("[{}] Token rejected: {}", request_id, e);
            HttpResponse::Unauthorized().json(ErrorResponse::unauthorized())
        }
        DomainError::Unauthorized => HttpResponse::Unauthorized().json(ErrorResponse::unauthorized()),
        DomainError::StoreUnavailable { dependency } => {
            log::warn!(
                "[{}] Dependency unavailable, failing closed: {}",
                request_id,
                dependency
            );
            HttpResponse::Unauthorized().json(ErrorResponse::unauthorized())
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        )),
        DomainError::Internal { message } => {
            log::error!("[{}] Internal error: {}", request_id, message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            ))
        }
    }
}

/// Like [`handle_domain_error`], but never answers an auth route with a 5xx
pub fn handle_auth_error(error: DomainError, request_id: &str) -> HttpResponse {
    match error {
        DomainError::Internal { message } => {
            log::error!("[{}] Internal error on auth path: {}", request_id, message);
            HttpResponse::Unauthorized().json(ErrorResponse::unauthorized())
        }
        other => handle_domain_error(other, request_id),
    }
}

/// 400 listing the fields that failed validation
pub fn handle_validation_error(errors: ValidationErrors) -> HttpResponse {
    let fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed")
            .add_detail("fields", fields),
    )
}
