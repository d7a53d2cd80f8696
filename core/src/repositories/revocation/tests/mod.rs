//! Tests for the mock revocation store

use std::time::Duration;

use crate::errors::DomainError;
use crate::repositories::revocation::{MockRevocationStore, RevocationStore};

#[tokio::test(start_paused = true)]
async fn test_entry_expires_after_ttl() {
    let store = MockRevocationStore::new();
    store
        .set_with_ttl("revoked-token:a", "revoked", Duration::from_secs(10))
        .await
        .unwrap();

    assert!(store.exists("revoked-token:a").await.unwrap());

    tokio::time::advance(Duration::from_secs(10)).await;
    assert!(!store.exists("revoked-token:a").await.unwrap());
}

#[tokio::test]
async fn test_last_write_wins() {
    let store = MockRevocationStore::new();
    store.set_with_ttl("k", "first", Duration::from_secs(60)).await.unwrap();
    store.set_with_ttl("k", "second", Duration::from_secs(60)).await.unwrap();

    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
    assert!(store.delete("k").await.unwrap());
    assert!(!store.delete("k").await.unwrap());
}

#[tokio::test]
async fn test_unavailable_store_errors() {
    let store = MockRevocationStore::new();
    store.set_unavailable(true);

    let result = store.exists("k").await;
    assert!(matches!(result, Err(DomainError::StoreUnavailable { .. })));
    assert_eq!(store.call_count(), 1);
}
