use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::RefreshTokenRequest;
use crate::handlers::{handle_auth_error, handle_validation_error};
use crate::middleware::RequestIdExt;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a refresh token for a new access token. Roles and permissions
/// are looked up again, so role changes take effect on the next refresh.
///
/// # Request Body
///
/// ```json
/// { "refresh_token": "eyJ..." }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "expires_in": 1800,
///     "token_type": "Bearer"
/// }
/// ```
///
/// `refresh_token` is included only when refresh-token rotation is enabled.
///
/// ## Errors
/// - 401 Unauthorized: Any failure; the reason is logged, not returned
pub async fn refresh_token(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state.auth.refresh(&request.refresh_token).await {
        Ok(grant) => HttpResponse::Ok().json(grant),
        Err(error) => handle_auth_error(error, &req.request_id()),
    }
}
