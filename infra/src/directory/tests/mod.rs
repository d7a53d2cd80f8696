//! Unit tests for the in-memory user directory

use crate::directory::{InMemoryUserDirectory, SEED_USERS};
use tg_core::repositories::UserDirectory;

#[tokio::test]
async fn test_seed_users_are_hashed_and_findable() {
    let directory = InMemoryUserDirectory::with_seed_users(4).unwrap();

    let admin = directory.find_by_username("admin").await.unwrap().unwrap();
    assert_eq!(admin.id, "user123");
    assert!(admin.roles.contains("Admin"));
    assert!(admin.permissions.contains("order:delete"));
    assert_ne!(admin.password_hash, "admin123");
    assert!(bcrypt::verify("admin123", &admin.password_hash).unwrap());

    let user = directory.find_by_id("user456").await.unwrap().unwrap();
    assert_eq!(user.username, "zhangsan");
    assert_eq!(user.roles.len(), 1);
}

#[tokio::test]
async fn test_each_seed_hash_has_its_own_salt() {
    let first = SEED_USERS[0].to_record(4).unwrap();
    let second = SEED_USERS[0].to_record(4).unwrap();
    assert_ne!(first.password_hash, second.password_hash);
}

#[tokio::test]
async fn test_set_roles_and_remove() {
    let directory = InMemoryUserDirectory::with_seed_users(4).unwrap();

    assert!(directory.set_roles("user456", ["User", "Auditor"]).await);
    assert!(!directory.set_roles("ghost", ["Admin"]).await);

    let user = directory.find_by_id("user456").await.unwrap().unwrap();
    assert!(user.roles.contains("Auditor"));

    directory.remove("user456").await;
    assert!(directory.find_by_username("zhangsan").await.unwrap().is_none());
}
