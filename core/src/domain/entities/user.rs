//! User record as stored in the user directory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::identity::Identity;

/// Directory entry for a user who can log in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique identifier for the user
    pub id: String,

    /// Login name
    pub username: String,

    /// bcrypt hash (embeds its own salt and cost)
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub roles: BTreeSet<String>,

    pub permissions: BTreeSet<String>,
}

impl UserRecord {
    /// Projects the record onto the identity carried in tokens
    pub fn identity(&self) -> Identity {
        Identity {
            subject_id: self.id.clone(),
            display_name: self.username.clone(),
            roles: self.roles.clone(),
            permissions: self.permissions.clone(),
        }
    }
}
