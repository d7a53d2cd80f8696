use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::LoginRequest;
use crate::handlers::{handle_auth_error, handle_validation_error};
use crate::middleware::RequestIdExt;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/login
///
/// # Request Body
///
/// ```json
/// { "username": "admin", "password": "admin123" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "expires_in": 1800,
///     "token_type": "Bearer"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing username or password
/// - 401 Unauthorized: Unknown user or wrong password (indistinguishable)
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state.auth.login(&request.username, &request.password).await {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(error) => handle_auth_error(error, &req.request_id()),
    }
}
