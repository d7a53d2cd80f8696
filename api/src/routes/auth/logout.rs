use actix_web::{web, HttpRequest, HttpResponse};

use tg_core::services::LogoutOutcome;

use crate::dto::{LogoutRequest, LogoutResponse};
use crate::handlers::handle_auth_error;
use crate::middleware::{extract_bearer_token, RequestIdExt};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the Bearer access token and, when the optional body names one,
/// the refresh token of the same user. Without a usable token this is a
/// no-op that still answers 200.
///
/// ## Errors
/// - 401 Unauthorized: The revocation store could not be reached
pub async fn logout(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: Option<web::Json<LogoutRequest>>,
) -> HttpResponse {
    let access_token = extract_bearer_token(req.headers());
    let refresh_token = body.and_then(|b| b.into_inner().refresh_token);

    match state
        .auth
        .logout(access_token.as_deref(), refresh_token.as_deref())
        .await
    {
        Ok(LogoutOutcome::Revoked) => HttpResponse::Ok().json(LogoutResponse {
            message: "Successfully logged out".to_string(),
        }),
        Ok(LogoutOutcome::NothingToRevoke) => {
            log::debug!("[{}] Logout without an active token", req.request_id());
            HttpResponse::Ok().json(LogoutResponse {
                message: "No active session".to_string(),
            })
        }
        Err(error) => handle_auth_error(error, &req.request_id()),
    }
}
