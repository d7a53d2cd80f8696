//! Denylist entries for revoked tokens.

use std::time::Duration;

/// Key prefix for revoked token ids in the revocation store
pub const REVOKED_TOKEN_KEY_PREFIX: &str = "revoked-token:";

/// Value stored against a revoked token id
pub const DEFAULT_REVOCATION_MARKER: &str = "revoked";

/// A revoked token id and how long the entry must outlive it.
///
/// The ttl always equals the token's remaining validity at the time of
/// revocation, so the denylist only ever holds tokens that would otherwise
/// still be accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevocationEntry {
    pub token_id: String,
    pub marker: String,
    pub ttl: Duration,
}

impl RevocationEntry {
    pub fn new(token_id: impl Into<String>, ttl: Duration) -> Self {
        Self {
            token_id: token_id.into(),
            marker: DEFAULT_REVOCATION_MARKER.to_string(),
            ttl,
        }
    }

    /// Replaces the default marker with a reason such as "logout"
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Store key for this entry
    pub fn key(&self) -> String {
        Self::key_for(&self.token_id)
    }

    /// Store key for a token id
    pub fn key_for(token_id: &str) -> String {
        format!("{}{}", REVOKED_TOKEN_KEY_PREFIX, token_id)
    }
}
