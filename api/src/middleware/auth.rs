//! Request identity: what the gateway established and what handlers extract.
//!
//! The gateway stores an [`AuthContext`] in the request extensions and also
//! forwards the identity as `X-User-*` headers. Downstream handlers read the
//! headers through [`ForwardedIdentity`] and never look at the token.

use actix_web::{
    dev::Payload,
    error::InternalError,
    http::header::{HeaderMap, AUTHORIZATION},
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use std::future::{ready, Ready};

use tg_core::domain::entities::Identity;
use tg_shared::ErrorResponse;

/// Forwarded subject id
pub const USER_ID_HEADER: &str = "x-user-id";
/// Forwarded display name
pub const USER_NAME_HEADER: &str = "x-user-name";
/// Forwarded roles, comma-joined
pub const USER_ROLES_HEADER: &str = "x-user-roles";

/// Prefix shared by every identity propagation header
pub const USER_HEADER_PREFIX: &str = "x-user-";

/// Authenticated caller, as established by the gateway
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub identity: Identity,
    /// JWT ID of the presented access token
    pub jti: Option<String>,
}

impl AuthContext {
    pub fn subject_id(&self) -> &str {
        &self.identity.subject_id
    }
}

/// The 401 every identity-requiring route answers with
pub fn unauthorized_error() -> Error {
    InternalError::from_response(
        "Authentication required",
        HttpResponse::Unauthorized().json(ErrorResponse::unauthorized()),
    )
    .into()
}

/// Extracts the Bearer token from an Authorization header
///
/// The scheme name is matched case-insensitively.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(unauthorized_error);

        ready(result)
    }
}

/// Identity rebuilt from the `X-User-*` headers
///
/// Permissions are not forwarded, so the rebuilt identity carries none.
#[derive(Debug, Clone)]
pub struct ForwardedIdentity(pub Identity);

impl ForwardedIdentity {
    fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let subject_id = header_text(headers, USER_ID_HEADER).filter(|id| !id.is_empty())?;
        let display_name = header_text(headers, USER_NAME_HEADER).unwrap_or_default();
        let roles = header_text(headers, USER_ROLES_HEADER).unwrap_or_default();

        Some(Self(Identity::new(
            subject_id,
            display_name,
            roles
                .split(',')
                .map(str::trim)
                .filter(|role| !role.is_empty()),
            Vec::<String>::new(),
        )))
    }
}

impl FromRequest for ForwardedIdentity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_headers(req.headers()).ok_or_else(unauthorized_error))
    }
}

/// Header values may hold UTF-8 names, which `to_str` rejects
fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| String::from_utf8(v.as_bytes().to_vec()).ok())
}
