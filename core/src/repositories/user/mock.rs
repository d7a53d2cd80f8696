//! Mock implementation of UserDirectory for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::entities::user::UserRecord;
use crate::errors::DomainError;

use super::r#trait::UserDirectory;

/// Mock user directory for testing
pub struct MockUserDirectory {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
    unavailable: AtomicBool,
    latency: RwLock<Option<Duration>>,
}

impl MockUserDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            unavailable: AtomicBool::new(false),
            latency: RwLock::new(None),
        }
    }

    /// Add or replace an account
    pub async fn insert(&self, user: UserRecord) {
        self.users.write().await.insert(user.id.clone(), user);
    }

    /// Remove an account by id
    pub async fn remove(&self, id: &str) {
        self.users.write().await.remove(id);
    }

    /// Replace an account's roles
    pub async fn set_roles<I, S>(&self, id: &str, roles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(user) = self.users.write().await.get_mut(id) {
            user.roles = roles.into_iter().map(Into::into).collect();
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn set_latency(&self, latency: Duration) {
        *self.latency.write().await = Some(latency);
    }

    async fn enter(&self) -> Result<(), DomainError> {
        let latency = *self.latency.read().await;
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::store_unavailable("mock-user-directory"));
        }
        Ok(())
    }
}

impl Default for MockUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, DomainError> {
        self.enter().await?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, DomainError> {
        self.enter().await?;
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }
}
