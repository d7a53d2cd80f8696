//! Unit tests for the authentication service

use chrono::{Duration as ChronoDuration, Utc};
use std::sync::Arc;

use crate::domain::entities::token::{Claims, TokenKind};
use crate::domain::entities::user::UserRecord;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{MockRevocationStore, MockUserDirectory};
use crate::services::auth::{AuthService, AuthServiceConfig, LogoutOutcome};
use crate::services::token::ClaimsDraft;

struct Fixture {
    directory: Arc<MockUserDirectory>,
    store: Arc<MockRevocationStore>,
    service: AuthService<MockUserDirectory, MockRevocationStore>,
}

async fn fixture(rotate: bool) -> Fixture {
    let directory = Arc::new(MockUserDirectory::new());
    directory
        .insert(UserRecord {
            id: "user456".to_string(),
            username: "zhangsan".to_string(),
            password_hash: bcrypt::hash("pass123", 4).unwrap(),
            roles: ["User".to_string()].into_iter().collect(),
            permissions: ["order:read".to_string(), "order:write".to_string()]
                .into_iter()
                .collect(),
        })
        .await;

    let mut config = AuthServiceConfig {
        bcrypt_cost: 4,
        ..Default::default()
    };
    config.token.rotate_refresh_tokens = rotate;

    let store = Arc::new(MockRevocationStore::new());
    let service = AuthService::new(directory.clone(), store.clone(), config).unwrap();

    Fixture {
        directory,
        store,
        service,
    }
}

#[tokio::test]
async fn test_login_issues_pair() {
    let fx = fixture(false).await;

    let pair = fx.service.login("zhangsan", "pass123").await.unwrap();
    let claims = fx.service.codec().decode_access(&pair.access_token).unwrap();
    assert_eq!(claims.sub, "user456");
    assert_eq!(pair.expires_in, 1800);
}

#[tokio::test]
async fn test_login_failure_is_invalid_credentials() {
    let fx = fixture(false).await;

    let result = fx.service.login("zhangsan", "wrong").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_refresh_without_rotation_omits_refresh_token() {
    let fx = fixture(false).await;
    let pair = fx.service.login("zhangsan", "pass123").await.unwrap();

    let grant = fx.service.refresh(&pair.refresh_token).await.unwrap();
    assert!(grant.refresh_token.is_none());
    assert_eq!(grant.token_type, "Bearer");
    assert!(fx.service.codec().decode_access(&grant.access_token).is_ok());
}

#[tokio::test]
async fn test_refresh_with_rotation_returns_new_refresh_token() {
    let fx = fixture(true).await;
    let pair = fx.service.login("zhangsan", "pass123").await.unwrap();

    let grant = fx.service.refresh(&pair.refresh_token).await.unwrap();
    let rotated = grant.refresh_token.unwrap();
    assert_ne!(rotated, pair.refresh_token);
}

#[tokio::test]
async fn test_refresh_failure_is_opaque() {
    let fx = fixture(false).await;
    let result = fx.service.refresh("garbage").await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidRefreshToken))
    ));
}

#[tokio::test]
async fn test_logout_revokes_access_token() {
    let fx = fixture(false).await;
    let pair = fx.service.login("zhangsan", "pass123").await.unwrap();
    let claims = fx.service.codec().decode_access(&pair.access_token).unwrap();

    let outcome = fx
        .service
        .logout(Some(&pair.access_token), None)
        .await
        .unwrap();
    assert_eq!(outcome, LogoutOutcome::Revoked);

    let jti = claims.jti.unwrap();
    assert!(fx.service.registry().is_revoked(&jti).await.unwrap());
}

#[tokio::test]
async fn test_logout_also_revokes_own_refresh_token() {
    let fx = fixture(false).await;
    let pair = fx.service.login("zhangsan", "pass123").await.unwrap();
    let refresh = fx.service.codec().decode_refresh(&pair.refresh_token).unwrap();

    fx.service
        .logout(Some(&pair.access_token), Some(&pair.refresh_token))
        .await
        .unwrap();

    let jti = refresh.jti.unwrap();
    assert!(fx.service.registry().is_revoked(&jti).await.unwrap());
    assert!(fx.service.refresh(&pair.refresh_token).await.is_err());
}

#[tokio::test]
async fn test_logout_without_token_is_a_no_op() {
    let fx = fixture(false).await;

    assert_eq!(
        fx.service.logout(None, None).await.unwrap(),
        LogoutOutcome::NothingToRevoke
    );
    assert_eq!(
        fx.service.logout(Some("garbage"), None).await.unwrap(),
        LogoutOutcome::NothingToRevoke
    );
    assert_eq!(fx.store.call_count(), 0);
}

#[tokio::test]
async fn test_logout_token_without_jti_skips_store() {
    let fx = fixture(false).await;
    let now = Utc::now().timestamp();
    let token = fx
        .service
        .codec()
        .sign(&Claims {
            sub: "user456".to_string(),
            jti: None,
            iat: now,
            exp: now + 600,
            iss: "AuthService".to_string(),
            aud: "ApiGateway".to_string(),
            kind: TokenKind::Access,
            name: Some("zhangsan".to_string()),
            roles: None,
            permissions: None,
        })
        .unwrap();

    let outcome = fx.service.logout(Some(&token), None).await.unwrap();
    assert_eq!(outcome, LogoutOutcome::NothingToRevoke);
    assert_eq!(fx.store.call_count(), 0);
}

#[tokio::test]
async fn test_logout_store_failure_is_an_error() {
    let fx = fixture(false).await;
    let pair = fx.service.login("zhangsan", "pass123").await.unwrap();
    fx.store.set_unavailable(true);

    let result = fx.service.logout(Some(&pair.access_token), None).await;
    assert!(matches!(result, Err(DomainError::StoreUnavailable { .. })));
}

#[tokio::test]
async fn test_whoami_reads_directory() {
    let fx = fixture(false).await;

    let identity = fx.service.whoami("user456").await.unwrap();
    assert_eq!(identity.display_name, "zhangsan");

    fx.directory.remove("user456").await;
    assert!(matches!(
        fx.service.whoami("user456").await,
        Err(DomainError::Unauthorized)
    ));
}

#[tokio::test]
async fn test_expired_access_token_cannot_log_out() {
    let fx = fixture(false).await;
    let identity = fx.service.whoami("user456").await.unwrap();
    let expired = fx
        .service
        .codec()
        .encode(ClaimsDraft::access(&identity), ChronoDuration::seconds(-10))
        .unwrap();

    let outcome = fx.service.logout(Some(&expired), None).await.unwrap();
    assert_eq!(outcome, LogoutOutcome::NothingToRevoke);
}
