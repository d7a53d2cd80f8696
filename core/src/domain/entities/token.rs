//! Token entities for JWT-based authentication.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::identity::Identity;

/// Access token expiration time (30 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 30;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Token type reported to clients
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Which half of the token pair a token is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims structure for JWT payload
///
/// Access tokens carry `name`, `roles` and `permissions`; refresh tokens carry
/// none of them so a leaked refresh token grants no authority by itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// JWT ID, the revocation lookup key. Always set on issue but tolerated
    /// as absent on decode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Access or refresh
    pub kind: TokenKind,

    /// Display name (access tokens only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Roles (access tokens only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<BTreeSet<String>>,

    /// Permissions (access tokens only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<BTreeSet<String>>,
}

impl Claims {
    /// Zero-tolerance expiry: expired from the instant `now` reaches `exp`
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    /// Time left before `exp`, or zero/negative when already expired
    pub fn remaining_lifetime_at(&self, now: i64) -> Duration {
        Duration::seconds(self.exp - now)
    }

    /// Rebuilds the identity embedded in an access token.
    ///
    /// Returns `None` for refresh tokens.
    pub fn identity(&self) -> Option<Identity> {
        if self.kind != TokenKind::Access {
            return None;
        }
        Some(Identity {
            subject_id: self.sub.clone(),
            display_name: self.name.clone().unwrap_or_default(),
            roles: self.roles.clone().unwrap_or_default(),
            permissions: self.permissions.clone().unwrap_or_default(),
        })
    }
}

/// Token pair returned to the client on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    /// Always "Bearer"
    pub token_type: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
            token_type: TOKEN_TYPE_BEARER.to_string(),
        }
    }
}

/// Result of a refresh: a new access token, plus a new refresh token only
/// when rotation is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl AccessGrant {
    /// Builds the grant from a freshly issued pair.
    ///
    /// `rotated` decides whether the pair's refresh token is handed back.
    pub fn from_pair(pair: TokenPair, rotated: bool) -> Self {
        Self {
            access_token: pair.access_token,
            expires_in: pair.expires_in,
            token_type: pair.token_type,
            refresh_token: rotated.then_some(pair.refresh_token),
        }
    }
}
