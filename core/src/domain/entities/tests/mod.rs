//! Unit tests for domain entities

use chrono::Utc;
use std::time::Duration;

use crate::domain::entities::{
    AccessGrant, Claims, Identity, NewOrderItem, Order, OrderStatus, RevocationEntry, TokenKind,
    TokenPair, UserRecord, TOKEN_TYPE_BEARER,
};

fn access_claims(exp: i64) -> Claims {
    Claims {
        sub: "user123".to_string(),
        jti: Some("jti-1".to_string()),
        iat: exp - 1800,
        exp,
        iss: "AuthService".to_string(),
        aud: "ApiGateway".to_string(),
        kind: TokenKind::Access,
        name: Some("admin".to_string()),
        roles: Some(["Admin", "User"].iter().map(|r| r.to_string()).collect()),
        permissions: Some(["order:read"].iter().map(|p| p.to_string()).collect()),
    }
}

#[test]
fn test_claims_expiry_boundary_is_exclusive() {
    let claims = access_claims(1_000);

    assert!(!claims.is_expired_at(999));
    assert!(claims.is_expired_at(1_000));
    assert!(claims.is_expired_at(1_001));
}

#[test]
fn test_claims_remaining_lifetime() {
    let claims = access_claims(1_000);
    assert_eq!(claims.remaining_lifetime_at(400).num_seconds(), 600);
    assert!(claims.remaining_lifetime_at(1_200).num_seconds() < 0);
}

#[test]
fn test_access_claims_rebuild_identity() {
    let identity = access_claims(1_000).identity().unwrap();

    assert_eq!(identity.subject_id, "user123");
    assert_eq!(identity.display_name, "admin");
    assert!(identity.has_role("Admin"));
    assert!(identity.has_permission("order:read"));
    assert_eq!(identity.roles_csv(), "Admin,User");
}

#[test]
fn test_refresh_claims_carry_no_identity() {
    let mut claims = access_claims(1_000);
    claims.kind = TokenKind::Refresh;
    claims.name = None;
    claims.roles = None;
    claims.permissions = None;

    assert!(claims.identity().is_none());

    let json = serde_json::to_value(&claims).unwrap();
    assert_eq!(json["kind"], "refresh");
    assert!(json.get("roles").is_none());
    assert!(json.get("name").is_none());
}

#[test]
fn test_claims_without_jti_deserialize() {
    let json = serde_json::json!({
        "sub": "user456",
        "iat": 0,
        "exp": 10,
        "iss": "AuthService",
        "aud": "ApiGateway",
        "kind": "access"
    });

    let claims: Claims = serde_json::from_value(json).unwrap();
    assert!(claims.jti.is_none());
    assert!(claims.roles.is_none());
}

#[test]
fn test_token_pair_and_grant() {
    let pair = TokenPair::new("access".into(), "refresh".into(), 1800);
    assert_eq!(pair.token_type, TOKEN_TYPE_BEARER);

    let echoed = AccessGrant::from_pair(pair.clone(), false);
    assert_eq!(echoed.access_token, "access");
    assert!(echoed.refresh_token.is_none());

    let rotated = AccessGrant::from_pair(pair, true);
    assert_eq!(rotated.refresh_token.as_deref(), Some("refresh"));
}

#[test]
fn test_identity_roles_csv_is_sorted() {
    let identity = Identity::new("u1", "someone", ["User", "Admin"], Vec::<String>::new());
    assert_eq!(identity.roles_csv(), "Admin,User");
    assert!(!identity.has_role("admin"));
}

#[test]
fn test_user_record_never_serializes_hash() {
    let record = UserRecord {
        id: "user456".to_string(),
        username: "zhangsan".to_string(),
        password_hash: "$2b$04$abc".to_string(),
        roles: ["User".to_string()].into_iter().collect(),
        permissions: Default::default(),
    };

    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(record.identity().display_name, "zhangsan");
}

#[test]
fn test_revocation_entry_key() {
    let entry = RevocationEntry::new("abc", Duration::from_secs(60)).with_marker("logout");
    assert_eq!(entry.key(), "revoked-token:abc");
    assert_eq!(entry.marker, "logout");
}

#[test]
fn test_new_order_totals_and_ownership() {
    let order = Order::new_pending(
        "user456",
        "zhangsan",
        vec![
            NewOrderItem {
                product_name: "Keyboard".to_string(),
                quantity: 2,
                price_cents: 4_500,
            },
            NewOrderItem {
                product_name: "Mouse".to_string(),
                quantity: 1,
                price_cents: 2_000,
            },
        ],
    );

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_amount, 11_000);
    assert_eq!(order.items[1].id, 2);
    assert!(order.is_owned_by("user456"));
    assert!(!order.is_owned_by("user123"));
    assert!(order.created_at <= Utc::now());
}
