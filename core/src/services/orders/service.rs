//! Order access control on top of the order repository

use std::sync::Arc;
use tracing::info;

use crate::domain::entities::identity::Identity;
use crate::domain::entities::order::{NewOrderItem, Order, OrderStatus};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::OrderRepository;

/// Role that may see and modify every order
pub const ADMIN_ROLE: &str = "Admin";

/// Applies the ownership rules: admins see everything, everyone else only
/// their own orders.
pub struct OrderService<R: ?Sized + OrderRepository> {
    repository: Arc<R>,
}

impl<R: ?Sized + OrderRepository> OrderService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list_for(&self, caller: &Identity) -> DomainResult<Vec<Order>> {
        info!(
            sub = %caller.subject_id,
            roles = %caller.roles_csv(),
            "Listing orders"
        );
        if caller.has_role(ADMIN_ROLE) {
            self.repository.list_all().await
        } else {
            self.repository.list_by_user(&caller.subject_id).await
        }
    }

    pub async fn get_for(&self, caller: &Identity, id: i64) -> DomainResult<Order> {
        let order = self.find(id).await?;
        ensure_can_access(caller, &order)?;
        Ok(order)
    }

    /// Creates a pending order owned by the caller
    pub async fn create_for(
        &self,
        caller: &Identity,
        items: Vec<NewOrderItem>,
    ) -> DomainResult<Order> {
        let order = Order::new_pending(&caller.subject_id, &caller.display_name, items);
        let order = self.repository.create(order).await?;
        info!(
            order_number = %order.order_number,
            sub = %caller.subject_id,
            "Order created"
        );
        Ok(order)
    }

    pub async fn update_status_for(
        &self,
        caller: &Identity,
        id: i64,
        status: OrderStatus,
    ) -> DomainResult<Order> {
        let order = self.find(id).await?;
        ensure_can_access(caller, &order)?;

        let updated = self
            .repository
            .update_status(id, status)
            .await?
            .ok_or_else(not_found)?;
        info!(order_id = id, status = ?status, "Order status updated");
        Ok(updated)
    }

    /// Deletes an order; admins only
    pub async fn delete_for(&self, caller: &Identity, id: i64) -> DomainResult<()> {
        if !caller.has_role(ADMIN_ROLE) {
            return Err(DomainError::Forbidden);
        }
        if !self.repository.delete(id).await? {
            return Err(not_found());
        }
        info!(order_id = id, "Order deleted");
        Ok(())
    }

    async fn find(&self, id: i64) -> DomainResult<Order> {
        self.repository.find_by_id(id).await?.ok_or_else(not_found)
    }
}

fn ensure_can_access(caller: &Identity, order: &Order) -> DomainResult<()> {
    if caller.has_role(ADMIN_ROLE) || order.is_owned_by(&caller.subject_id) {
        Ok(())
    } else {
        Err(DomainError::Forbidden)
    }
}

fn not_found() -> DomainError {
    DomainError::NotFound {
        resource: "Order".to_string(),
    }
}
