//! Unit tests for order ownership rules

use std::sync::Arc;

use crate::domain::entities::identity::Identity;
use crate::domain::entities::order::{NewOrderItem, OrderStatus};
use crate::errors::DomainError;
use crate::repositories::MockOrderRepository;
use crate::services::orders::OrderService;

fn admin() -> Identity {
    Identity::new("user123", "admin", ["Admin", "User"], Vec::<String>::new())
}

fn zhangsan() -> Identity {
    Identity::new("user456", "zhangsan", ["User"], Vec::<String>::new())
}

fn item() -> NewOrderItem {
    NewOrderItem {
        product_name: "Laptop".to_string(),
        quantity: 1,
        price_cents: 29_999,
    }
}

async fn seeded() -> OrderService<MockOrderRepository> {
    let service = OrderService::new(Arc::new(MockOrderRepository::new()));
    service.create_for(&admin(), vec![item()]).await.unwrap();
    service.create_for(&zhangsan(), vec![item(), item()]).await.unwrap();
    service
}

#[tokio::test]
async fn test_admin_lists_all_user_lists_own() {
    let service = seeded().await;

    assert_eq!(service.list_for(&admin()).await.unwrap().len(), 2);

    let own = service.list_for(&zhangsan()).await.unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].user_id, "user456");
    assert_eq!(own[0].total_amount, 59_998);
}

#[tokio::test]
async fn test_foreign_order_is_forbidden() {
    let service = seeded().await;

    let result = service.get_for(&zhangsan(), 1).await;
    assert!(matches!(result, Err(DomainError::Forbidden)));

    assert!(service.get_for(&admin(), 2).await.is_ok());
    assert!(service.get_for(&zhangsan(), 2).await.is_ok());
}

#[tokio::test]
async fn test_missing_order_is_not_found() {
    let service = seeded().await;
    let result = service.get_for(&admin(), 99).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_status_respects_ownership() {
    let service = seeded().await;

    let forbidden = service
        .update_status_for(&zhangsan(), 1, OrderStatus::Cancelled)
        .await;
    assert!(matches!(forbidden, Err(DomainError::Forbidden)));

    let updated = service
        .update_status_for(&zhangsan(), 2, OrderStatus::Paid)
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Paid);
}

#[tokio::test]
async fn test_only_admin_deletes() {
    let service = seeded().await;

    let forbidden = service.delete_for(&zhangsan(), 2).await;
    assert!(matches!(forbidden, Err(DomainError::Forbidden)));

    service.delete_for(&admin(), 2).await.unwrap();
    let missing = service.delete_for(&admin(), 2).await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}
