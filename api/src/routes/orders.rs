//! Order service routes.
//!
//! These handlers sit behind the gateway and trust only the forwarded
//! `X-User-*` headers; they never inspect a token.

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use tg_core::domain::entities::NewOrderItem;

use crate::dto::{CreateOrderRequest, UpdateOrderStatusRequest};
use crate::handlers::{handle_domain_error, handle_validation_error};
use crate::middleware::{ForwardedIdentity, RequestIdExt};
use crate::routes::AppState;

/// GET /api/v1/orders
///
/// Admins see every order; everyone else only their own.
pub async fn list_orders(
    req: HttpRequest,
    state: web::Data<AppState>,
    ForwardedIdentity(caller): ForwardedIdentity,
) -> HttpResponse {
    match state.orders.list_for(&caller).await {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(error) => handle_domain_error(error, &req.request_id()),
    }
}

/// GET /api/v1/orders/{id}
pub async fn get_order(
    req: HttpRequest,
    state: web::Data<AppState>,
    ForwardedIdentity(caller): ForwardedIdentity,
    path: web::Path<i64>,
) -> HttpResponse {
    match state.orders.get_for(&caller, path.into_inner()).await {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(error) => handle_domain_error(error, &req.request_id()),
    }
}

/// POST /api/v1/orders
pub async fn create_order(
    req: HttpRequest,
    state: web::Data<AppState>,
    ForwardedIdentity(caller): ForwardedIdentity,
    request: web::Json<CreateOrderRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    let items: Vec<NewOrderItem> = request
        .into_inner()
        .items
        .into_iter()
        .map(NewOrderItem::from)
        .collect();

    match state.orders.create_for(&caller, items).await {
        Ok(order) => HttpResponse::Created().json(order),
        Err(error) => handle_domain_error(error, &req.request_id()),
    }
}

/// PUT /api/v1/orders/{id}/status
pub async fn update_order_status(
    req: HttpRequest,
    state: web::Data<AppState>,
    ForwardedIdentity(caller): ForwardedIdentity,
    path: web::Path<i64>,
    request: web::Json<UpdateOrderStatusRequest>,
) -> HttpResponse {
    match state
        .orders
        .update_status_for(&caller, path.into_inner(), request.status)
        .await
    {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(error) => handle_domain_error(error, &req.request_id()),
    }
}

/// DELETE /api/v1/orders/{id}
///
/// Admins only.
pub async fn delete_order(
    req: HttpRequest,
    state: web::Data<AppState>,
    ForwardedIdentity(caller): ForwardedIdentity,
    path: web::Path<i64>,
) -> HttpResponse {
    match state.orders.delete_for(&caller, path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error, &req.request_id()),
    }
}
