//! Authentication gateway.
//!
//! Strips client-supplied identity headers, validates the Bearer access
//! token, consults the revocation registry and forwards the identity to the
//! router as `X-User-*` headers plus an [`AuthContext`] extension.
//!
//! An invalid token leaves the request anonymous; the route decides whether
//! that is acceptable. A revoked token, or one whose revocation status cannot
//! be determined, is answered with 401 before the router runs.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use tg_core::domain::entities::{Claims, Identity};
use tg_core::repositories::RevocationStore;
use tg_core::services::{RevocationRegistry, TokenCodec};
use tg_shared::ErrorResponse;

use super::auth::{
    extract_bearer_token, AuthContext, USER_HEADER_PREFIX, USER_ID_HEADER, USER_NAME_HEADER,
    USER_ROLES_HEADER,
};
use super::request_log::RequestIdExt;

/// Gateway middleware factory
pub struct Gateway {
    codec: Arc<TokenCodec>,
    registry: Arc<RevocationRegistry<dyn RevocationStore>>,
    /// Log rejected tokens at info instead of debug
    log_token_failures: bool,
}

impl Gateway {
    pub fn new(
        codec: Arc<TokenCodec>,
        registry: Arc<RevocationRegistry<dyn RevocationStore>>,
    ) -> Self {
        Self {
            codec,
            registry,
            log_token_failures: false,
        }
    }

    pub fn with_token_failure_logging(mut self, enabled: bool) -> Self {
        self.log_token_failures = enabled;
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for Gateway
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = GatewayService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GatewayService {
            service: Rc::new(service),
            codec: self.codec.clone(),
            registry: self.registry.clone(),
            log_token_failures: self.log_token_failures,
        }))
    }
}

/// Gateway middleware service
pub struct GatewayService<S> {
    service: Rc<S>,
    codec: Arc<TokenCodec>,
    registry: Arc<RevocationRegistry<dyn RevocationStore>>,
    log_token_failures: bool,
}

impl<S, B> Service<ServiceRequest> for GatewayService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let codec = self.codec.clone();
        let registry = self.registry.clone();
        let log_token_failures = self.log_token_failures;

        Box::pin(async move {
            let request_id = req.request_id();
            strip_identity_headers(&mut req, &request_id);

            let claims = match extract_bearer_token(req.headers()) {
                Some(token) => match codec.decode_access(&token) {
                    Ok(claims) => Some(claims),
                    Err(e) => {
                        if log_token_failures {
                            log::info!("[{}] Bearer token rejected: {}", request_id, e);
                        } else {
                            log::debug!("[{}] Bearer token rejected: {}", request_id, e);
                        }
                        None
                    }
                },
                None => None,
            };

            if let Some(claims) = claims {
                match claims.jti.as_deref() {
                    Some(jti) => match registry.is_revoked(jti).await {
                        Ok(false) => {}
                        Ok(true) => {
                            log::info!(
                                "[{}] Revoked token presented by {}",
                                request_id,
                                claims.sub
                            );
                            return Ok(reject(req));
                        }
                        Err(e) => {
                            log::warn!(
                                "[{}] Revocation status unknown, rejecting request (degraded dependency): {}",
                                request_id,
                                e
                            );
                            return Ok(reject(req));
                        }
                    },
                    None => log::debug!(
                        "[{}] Token for {} has no jti; revocation check skipped",
                        request_id,
                        claims.sub
                    ),
                }

                authenticate(&mut req, claims, &request_id);
            }

            let response = service.call(req).await?;
            Ok(response.map_into_left_body())
        })
    }
}

/// Removes every inbound `X-User-*` header; only the gateway may set them
fn strip_identity_headers(req: &mut ServiceRequest, request_id: &str) {
    let forged: Vec<HeaderName> = req
        .headers()
        .keys()
        .filter(|name| name.as_str().starts_with(USER_HEADER_PREFIX))
        .cloned()
        .collect();

    if !forged.is_empty() {
        log::debug!(
            "[{}] Dropping {} client-supplied identity header(s)",
            request_id,
            forged.len()
        );
    }
    for name in forged {
        req.headers_mut().remove(name);
    }
}

fn authenticate(req: &mut ServiceRequest, claims: Claims, request_id: &str) {
    let Some(identity) = claims.identity() else {
        return;
    };

    match identity_headers(&identity) {
        Some(headers) => {
            for (name, value) in headers {
                req.headers_mut().insert(name, value);
            }
            log::debug!("[{}] Authenticated {}", request_id, identity.subject_id);
            req.extensions_mut().insert(AuthContext {
                identity,
                jti: claims.jti,
            });
        }
        None => log::warn!(
            "[{}] Identity for {} cannot be carried in headers; request left anonymous",
            request_id,
            identity.subject_id
        ),
    }
}

/// `None` if a value contains bytes a header cannot hold
fn identity_headers(identity: &Identity) -> Option<[(HeaderName, HeaderValue); 3]> {
    Some([
        (
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_bytes(identity.subject_id.as_bytes()).ok()?,
        ),
        (
            HeaderName::from_static(USER_NAME_HEADER),
            HeaderValue::from_bytes(identity.display_name.as_bytes()).ok()?,
        ),
        (
            HeaderName::from_static(USER_ROLES_HEADER),
            HeaderValue::from_bytes(identity.roles_csv().as_bytes()).ok()?,
        ),
    ])
}

fn reject<B>(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
    req.into_response(HttpResponse::Unauthorized().json(ErrorResponse::unauthorized()))
        .map_into_right_body()
}
