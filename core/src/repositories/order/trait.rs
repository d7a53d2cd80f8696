//! Order repository trait for the demonstration order service.

use async_trait::async_trait;

use crate::domain::entities::order::{Order, OrderStatus};
use crate::errors::DomainError;

/// Repository trait for Order persistence
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Every order, oldest first
    async fn list_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Orders owned by `user_id`, oldest first
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError>;

    /// Persist a new order, assigning its id and order number
    async fn create(&self, order: Order) -> Result<Order, DomainError>;

    /// Change an order's status
    ///
    /// # Returns
    /// * `Ok(Some(Order))` - The updated order
    /// * `Ok(None)` - No order with that id
    async fn update_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError>;

    /// Remove an order
    ///
    /// # Returns
    /// * `Ok(true)` - Order removed
    /// * `Ok(false)` - No order with that id
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
