//! In-memory user directory

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;
use tracing::info;

use tg_core::domain::entities::UserRecord;
use tg_core::errors::DomainError;
use tg_core::repositories::UserDirectory;

use crate::InfrastructureError;

/// Plain-text description of a demo account, hashed on load
#[derive(Debug, Clone, Copy)]
pub struct SeedUser {
    pub id: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub roles: &'static [&'static str],
    pub permissions: &'static [&'static str],
}

/// Demo accounts available out of the box
pub const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        id: "user123",
        username: "admin",
        password: "admin123",
        roles: &["Admin", "User"],
        permissions: &[
            "order:read",
            "order:write",
            "order:delete",
            "user:read",
            "user:write",
        ],
    },
    SeedUser {
        id: "user456",
        username: "zhangsan",
        password: "pass123",
        roles: &["User"],
        permissions: &["order:read", "order:write"],
    },
];

/// User directory held in process memory, keyed by user id
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserDirectory {
    pub fn new(users: impl IntoIterator<Item = UserRecord>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id.clone(), u)).collect()),
        }
    }

    /// Directory holding [`SEED_USERS`], hashed with `bcrypt_cost`
    pub fn with_seed_users(bcrypt_cost: u32) -> Result<Self, InfrastructureError> {
        let users = SEED_USERS
            .iter()
            .map(|seed| seed.to_record(bcrypt_cost))
            .collect::<Result<Vec<_>, _>>()?;
        info!(count = users.len(), "Loaded seed user accounts");
        Ok(Self::new(users))
    }

    /// Adds or replaces an account
    pub async fn upsert(&self, user: UserRecord) {
        self.users.write().await.insert(user.id.clone(), user);
    }

    /// Replaces the roles of an existing account; false if the id is unknown
    pub async fn set_roles<I, S>(&self, id: &str, roles: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.users.write().await.get_mut(id) {
            Some(user) => {
                user.roles = roles.into_iter().map(Into::into).collect();
                true
            }
            None => false,
        }
    }

    pub async fn remove(&self, id: &str) -> Option<UserRecord> {
        self.users.write().await.remove(id)
    }
}

impl SeedUser {
    pub fn to_record(&self, bcrypt_cost: u32) -> Result<UserRecord, InfrastructureError> {
        let password_hash = bcrypt::hash(self.password, bcrypt_cost).map_err(|e| {
            InfrastructureError::General(format!("Failed to hash seed password: {}", e))
        })?;

        Ok(UserRecord {
            id: self.id.to_string(),
            username: self.username.to_string(),
            password_hash,
            roles: to_set(self.roles),
            permissions: to_set(self.permissions),
        })
    }
}

fn to_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }
}
