//! Mock implementation of OrderRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::order::{Order, OrderStatus};
use crate::errors::DomainError;

use super::r#trait::OrderRepository;

/// Mock order repository for testing
pub struct MockOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl MockOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for MockOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepository {
    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.orders.read().await.clone())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.iter().filter(|o| o.user_id == user_id).cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    async fn create(&self, mut order: Order) -> Result<Order, DomainError> {
        let mut orders = self.orders.write().await;
        order.id = orders.iter().map(|o| o.id).max().unwrap_or(0) + 1;
        order.order_number = format!("ORD-TEST-{:03}", order.id);
        orders.push(order.clone());
        Ok(order)
    }

    async fn update_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError> {
        let mut orders = self.orders.write().await;
        Ok(orders.iter_mut().find(|o| o.id == id).map(|order| {
            order.status = status;
            order.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut orders = self.orders.write().await;
        let before = orders.len();
        orders.retain(|o| o.id != id);
        Ok(orders.len() != before)
    }
}
