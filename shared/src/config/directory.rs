//! User directory configuration

use serde::{Deserialize, Serialize};

/// Settings for user lookups and password hashing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// Upper bound for a single directory lookup, in milliseconds
    pub lookup_timeout_ms: u64,

    /// bcrypt cost factor used when hashing passwords
    pub bcrypt_cost: u32,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: 1000,
            bcrypt_cost: 12,
        }
    }
}

impl DirectoryConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            lookup_timeout_ms: std::env::var("DIRECTORY_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.lookup_timeout_ms),
            // bcrypt accepts costs 4..=31
            bcrypt_cost: std::env::var("BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .map(|cost| cost.clamp(4, 31))
                .unwrap_or(defaults.bcrypt_cost),
        }
    }
}
