//! HS256 JWT encoding and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{Claims, TokenKind};
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Claims to be signed, minus the fields the codec stamps itself
/// (`jti`, `iat`, `exp`, `iss`, `aud`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimsDraft {
    pub sub: String,
    pub kind: TokenKind,
    pub name: Option<String>,
    pub roles: Option<BTreeSet<String>>,
    pub permissions: Option<BTreeSet<String>>,
}

impl ClaimsDraft {
    /// Access token draft carrying the full identity
    pub fn access(identity: &Identity) -> Self {
        Self {
            sub: identity.subject_id.clone(),
            kind: TokenKind::Access,
            name: Some(identity.display_name.clone()),
            roles: Some(identity.roles.clone()),
            permissions: Some(identity.permissions.clone()),
        }
    }

    /// Refresh token draft: subject only
    pub fn refresh(subject_id: impl Into<String>) -> Self {
        Self {
            sub: subject_id.into(),
            kind: TokenKind::Refresh,
            name: None,
            roles: None,
            permissions: None,
        }
    }
}

/// Signs and verifies tokens with a shared symmetric secret
///
/// The codec is pure: no I/O, and its key material never changes after
/// construction, so one instance is shared behind an `Arc`.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
}

impl TokenCodec {
    pub fn new(secret: &[u8], issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        let issuer = issuer.into();
        let audience = audience.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer.as_str()]);
        validation.set_audience(&[audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        // Expiry is checked by `decode_and_verify_at` with zero leeway.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer,
            audience,
        }
    }

    pub fn from_config(config: &TokenServiceConfig) -> Self {
        Self::new(config.jwt_secret.as_bytes(), &config.issuer, &config.audience)
    }

    /// Signs `draft` with a fresh jti, valid for `ttl` from now
    pub fn encode(&self, draft: ClaimsDraft, ttl: Duration) -> Result<String, TokenError> {
        self.encode_at(draft, ttl, Utc::now().timestamp())
    }

    /// Same as [`encode`](Self::encode) with an explicit clock reading
    pub fn encode_at(
        &self,
        draft: ClaimsDraft,
        ttl: Duration,
        now: i64,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            sub: draft.sub,
            jti: Some(Uuid::new_v4().to_string()),
            iat: now,
            exp: now.saturating_add(ttl.num_seconds()),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            kind: draft.kind,
            name: draft.name,
            roles: draft.roles,
            permissions: draft.permissions,
        };
        self.sign(&claims)
    }

    /// Signs `claims` exactly as given
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)
    }

    /// Verifies signature, issuer, audience and expiry
    pub fn decode_and_verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_and_verify_at(token, Utc::now().timestamp())
    }

    /// Same as [`decode_and_verify`](Self::decode_and_verify) against an
    /// explicit clock reading. A token is expired from the second `now`
    /// reaches `exp`.
    pub fn decode_and_verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                ErrorKind::InvalidIssuer => TokenError::IssuerMismatch,
                ErrorKind::InvalidAudience => TokenError::AudienceMismatch,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::MalformedToken,
            })?;

        let claims = token_data.claims;
        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }

    /// Verifies the token and requires it to be an access token
    pub fn decode_access(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_kind_at(token, TokenKind::Access, Utc::now().timestamp())
    }

    /// Verifies the token and requires it to be a refresh token
    pub fn decode_refresh(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_kind_at(token, TokenKind::Refresh, Utc::now().timestamp())
    }

    pub fn decode_kind_at(
        &self,
        token: &str,
        kind: TokenKind,
        now: i64,
    ) -> Result<Claims, TokenError> {
        let claims = self.decode_and_verify_at(token, now)?;
        if claims.kind != kind {
            return Err(TokenError::WrongKind);
        }
        Ok(claims)
    }
}
