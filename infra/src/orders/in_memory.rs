//! In-memory order repository

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use tokio::sync::RwLock;

use tg_core::domain::entities::{Order, OrderItem, OrderStatus};
use tg_core::errors::DomainError;
use tg_core::repositories::OrderRepository;

/// Orders held in process memory, in creation order
#[derive(Default)]
pub struct InMemoryOrderRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    orders: Vec<Order>,
    /// Orders ever created, used for the order number sequence
    created: u32,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository holding one order for each demo account
    pub fn with_seed_orders() -> Self {
        let seeded = vec![
            seed_order(1, "ORD-2025-001", "user123", "admin", "Laptop", 29_999, OrderStatus::Completed),
            seed_order(2, "ORD-2025-002", "user456", "zhangsan", "Mechanical keyboard", 8_950, OrderStatus::Pending),
        ];
        Self {
            state: RwLock::new(State {
                created: seeded.len() as u32,
                orders: seeded,
            }),
        }
    }
}

fn seed_order(
    id: i64,
    order_number: &str,
    user_id: &str,
    user_name: &str,
    product: &str,
    price_cents: i64,
    status: OrderStatus,
) -> Order {
    Order {
        id,
        order_number: order_number.to_string(),
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        items: vec![OrderItem {
            id: 1,
            product_name: product.to_string(),
            quantity: 1,
            price_cents,
        }],
        total_amount: price_cents,
        status,
        created_at: Utc::now(),
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list_all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.state.read().await.orders.clone())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let state = self.state.read().await;
        Ok(state.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn create(&self, mut order: Order) -> Result<Order, DomainError> {
        let mut state = self.state.write().await;
        state.created += 1;

        order.id = state.orders.iter().map(|o| o.id).max().unwrap_or(0) + 1;
        order.order_number = format!("ORD-{}-{:03}", Utc::now().year(), state.created);
        state.orders.push(order.clone());
        Ok(order)
    }

    async fn update_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<Option<Order>, DomainError> {
        let mut state = self.state.write().await;
        Ok(state.orders.iter_mut().find(|o| o.id == id).map(|order| {
            order.status = status;
            order.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        let before = state.orders.len();
        state.orders.retain(|o| o.id != id);
        Ok(state.orders.len() != before)
    }
}
