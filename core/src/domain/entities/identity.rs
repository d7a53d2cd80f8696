//! Canonical identity record produced by credential verification.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Who a request acts as, and what it may do.
///
/// Produced by the credential verifier or the user directory and never
/// mutated afterwards. Sets are ordered so the serialized role list is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable user identifier (the token `sub`)
    pub subject_id: String,

    /// Human-readable name
    pub display_name: String,

    /// Role names, e.g. "Admin", "User"
    pub roles: BTreeSet<String>,

    /// Fine-grained permissions, e.g. "order:read"
    pub permissions: BTreeSet<String>,
}

impl Identity {
    pub fn new<R, P>(
        subject_id: impl Into<String>,
        display_name: impl Into<String>,
        roles: R,
        permissions: P,
    ) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            subject_id: subject_id.into(),
            display_name: display_name.into(),
            roles: roles.into_iter().map(Into::into).collect(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Simple set-membership role check
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// Roles joined with commas, in sorted order
    pub fn roles_csv(&self) -> String {
        self.roles.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }
}
