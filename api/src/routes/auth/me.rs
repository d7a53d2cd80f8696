use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::IdentityResponse;
use crate::handlers::handle_auth_error;
use crate::middleware::{AuthContext, RequestIdExt};
use crate::routes::AppState;

/// Handler for GET /api/v1/auth/me
///
/// Returns the caller's current directory entry, not the token's snapshot.
pub async fn me(req: HttpRequest, state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.auth.whoami(auth.subject_id()).await {
        Ok(identity) => HttpResponse::Ok().json(IdentityResponse::from(identity)),
        Err(error) => handle_auth_error(error, &req.request_id()),
    }
}
