mod common;

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde_json::Value;

use cookbook::cookbook_auth::{TokenError, create_access_token, verify_token};

use common::{TEST_SECRET, test_jwt_config};

fn raw_payload(token: &str) -> Value {
    decode::<Value>(
        token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &Validation::default(),
    )
    .unwrap()
    .claims
}

#[test]
fn test_issued_payload_nests_the_user_id() {
    let token = create_access_token(17, &test_jwt_config()).unwrap();
    let payload = raw_payload(&token);

    assert_eq!(payload["user"]["id"], 17);
    assert!(payload.get("id").is_none());
    assert!(payload["iat"].is_u64());
    assert!(payload["exp"].is_u64());
}

#[test]
fn test_expiry_follows_config() {
    let mut config = test_jwt_config();
    config.access_token_expiry = 900;

    let token = create_access_token(1, &config).unwrap();
    let payload = raw_payload(&token);
    let lifetime = payload["exp"].as_u64().unwrap() - payload["iat"].as_u64().unwrap();
    assert_eq!(lifetime, 900);
}

#[test]
fn test_different_users_get_different_tokens() {
    let config = test_jwt_config();
    let first = create_access_token(1, &config).unwrap();
    let second = create_access_token(2, &config).unwrap();
    assert_ne!(first, second);

    assert_eq!(verify_token(&first, &config).unwrap().user_id(), 1);
    assert_eq!(verify_token(&second, &config).unwrap().user_id(), 2);
}

#[test]
fn test_malformed_tokens_are_invalid() {
    let config = test_jwt_config();
    for token in ["", "abc", "a.b.c", "eyJhbGciOiJIUzI1NiJ9.e30."] {
        let err = verify_token(token, &config).unwrap_err();
        assert!(matches!(err, TokenError::Invalid(_)), "{token:?}");
    }
}
