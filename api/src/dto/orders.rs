use serde::{Deserialize, Serialize};
use validator::Validate;

use tg_core::domain::entities::{NewOrderItem, OrderStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemRequest {
    #[validate(length(min = 1, max = 200))]
    pub product_name: String,

    #[validate(range(min = 1, max = 10000))]
    pub quantity: u32,

    /// Unit price in cents
    #[validate(range(min = 0))]
    pub price_cents: i64,
}

impl From<OrderItemRequest> for NewOrderItem {
    fn from(item: OrderItemRequest) -> Self {
        Self {
            product_name: item.product_name,
            quantity: item.quantity,
            price_cents: item.price_cents,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, max = 100), nested)]
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}
