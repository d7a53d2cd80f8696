//! Tests for the mock user directory

use crate::domain::entities::UserRecord;
use crate::repositories::user::{MockUserDirectory, UserDirectory};

fn record() -> UserRecord {
    UserRecord {
        id: "user456".to_string(),
        username: "zhangsan".to_string(),
        password_hash: String::new(),
        roles: ["User".to_string()].into_iter().collect(),
        permissions: Default::default(),
    }
}

#[tokio::test]
async fn test_lookup_by_username_and_id() {
    let directory = MockUserDirectory::new();
    directory.insert(record()).await;

    let by_name = directory.find_by_username("zhangsan").await.unwrap().unwrap();
    assert_eq!(by_name.id, "user456");
    assert!(directory.find_by_id("user456").await.unwrap().is_some());
    assert!(directory.find_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_set_roles_replaces_roles() {
    let directory = MockUserDirectory::new();
    directory.insert(record()).await;
    directory.set_roles("user456", ["Admin"]).await;

    let user = directory.find_by_id("user456").await.unwrap().unwrap();
    assert!(user.roles.contains("Admin"));
    assert!(!user.roles.contains("User"));
}

#[tokio::test]
async fn test_unavailable_directory_errors() {
    let directory = MockUserDirectory::new();
    directory.set_unavailable(true);
    assert!(directory.find_by_id("user456").await.is_err());
}
