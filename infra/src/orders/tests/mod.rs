//! Unit tests for the in-memory order repository

use chrono::{Datelike, Utc};

use crate::orders::InMemoryOrderRepository;
use tg_core::domain::entities::{NewOrderItem, Order, OrderStatus};
use tg_core::repositories::OrderRepository;

#[tokio::test]
async fn test_seed_orders() {
    let repo = InMemoryOrderRepository::with_seed_orders();

    let all = repo.list_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].order_number, "ORD-2025-001");
    assert_eq!(all[0].status, OrderStatus::Completed);

    let own = repo.list_by_user("user456").await.unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].id, 2);
}

#[tokio::test]
async fn test_create_assigns_next_id_and_number() {
    let repo = InMemoryOrderRepository::with_seed_orders();
    let order = Order::new_pending(
        "user456",
        "zhangsan",
        vec![NewOrderItem {
            product_name: "Mouse".to_string(),
            quantity: 3,
            price_cents: 1_000,
        }],
    );

    let created = repo.create(order).await.unwrap();
    assert_eq!(created.id, 3);
    assert_eq!(
        created.order_number,
        format!("ORD-{}-003", Utc::now().year())
    );
    assert_eq!(created.total_amount, 3_000);
    assert!(repo.find_by_id(3).await.unwrap().is_some());
}

#[tokio::test]
async fn test_order_numbers_keep_increasing_after_delete() {
    let repo = InMemoryOrderRepository::with_seed_orders();
    assert!(repo.delete(2).await.unwrap());

    let created = repo
        .create(Order::new_pending("user123", "admin", vec![]))
        .await
        .unwrap();
    assert_eq!(created.id, 2);
    assert!(created.order_number.ends_with("-003"));
}

#[tokio::test]
async fn test_update_status() {
    let repo = InMemoryOrderRepository::with_seed_orders();
    let updated = repo.update_status(2, OrderStatus::Shipped).await.unwrap().unwrap();
    assert_eq!(updated.status, OrderStatus::Shipped);
    assert!(repo.update_status(9, OrderStatus::Paid).await.unwrap().is_none());
}
