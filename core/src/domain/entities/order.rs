//! Order entity for the downstream order service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

/// A single line of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price in cents
    pub price_cents: i64,
}

/// Line item as submitted by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub product_name: String,
    pub quantity: u32,
    pub price_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    /// Owner's subject id
    pub user_id: String,
    pub user_name: String,
    pub items: Vec<OrderItem>,
    /// Sum of line totals, in cents
    pub total_amount: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Builds a pending order owned by `user_id`; ids are assigned by the repository.
    pub fn new_pending(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        items: Vec<NewOrderItem>,
    ) -> Self {
        let items: Vec<OrderItem> = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| OrderItem {
                id: index as i64 + 1,
                product_name: item.product_name,
                quantity: item.quantity,
                price_cents: item.price_cents,
            })
            .collect();
        let total_amount = items
            .iter()
            .map(|item| item.price_cents * i64::from(item.quantity))
            .sum();

        Self {
            id: 0,
            order_number: String::new(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            items,
            total_amount,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_owned_by(&self, subject_id: &str) -> bool {
        self.user_id == subject_id
    }
}
