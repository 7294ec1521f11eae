//! Whole-router behavior that is decided before any query runs.

mod common;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::Utc;
use serde_json::json;
use tower::ServiceExt;

use cookbook::cookbook_auth::{Claims, TokenSubject, sign_claims};
use cookbook::middleware::auth::{
    EXPIRED_TOKEN_MESSAGE, MISSING_TOKEN_MESSAGE, UNKNOWN_USER_MESSAGE,
};
use cookbook::router::{ROUTE_NOT_FOUND_MESSAGE, init_router};

use common::{body_json, state_with_users, test_jwt_config, test_state, test_user};

fn app() -> Router {
    init_router(test_state())
}

fn token_expiring_in(seconds: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        subject: TokenSubject::nested(1),
        iat: (now - 7200) as usize,
        exp: (now + seconds) as usize,
    };
    sign_claims(&claims, &test_jwt_config()).unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

fn post_json(uri: &str, body: serde_json::Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_write_without_token_is_unauthorized() {
    for uri in [
        "/api/recipes",
        "/api/cookbooks",
        "/api/categories",
        "/api/ingredients",
        "/api/cookbook-categories",
        "/api/cookbook-recipes",
        "/api/recipe-categories",
    ] {
        let (status, body) = send(post_json(uri, json!({}), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["message"], MISSING_TOKEN_MESSAGE);
        assert_eq!(body["status"], 401);
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let token = token_expiring_in(-3600);
    let (status, body) = send(post_json("/api/recipes", json!({}), Some(&token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], EXPIRED_TOKEN_MESSAGE);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let (status, body) = send(post_json("/api/recipes", json!({}), Some("not.a.jwt"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_ne!(body["message"], EXPIRED_TOKEN_MESSAGE);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let now = Utc::now().timestamp();
    let claims = Claims {
        subject: TokenSubject::Direct { id: 1 },
        iat: now as usize,
        exp: (now + 600) as usize,
    };
    let mut config = test_jwt_config();
    config.secret = "someone-else".to_string();
    let token = sign_claims(&claims, &config).unwrap();

    let (status, _) = send(post_json("/api/cookbooks", json!({}), Some(&token))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_current_user_requires_token() {
    let request = Request::builder()
        .uri("/api/auth/me")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], MISSING_TOKEN_MESSAGE);
}

#[tokio::test]
async fn test_user_listing_requires_token() {
    let request = Request::builder()
        .uri("/api/users?page=2")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let request = Request::builder()
        .uri("/api/spatulas")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], ROUTE_NOT_FOUND_MESSAGE);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    for uri in ["/api/recipes/abc", "/api/categories/1.5", "/api/recipe-categories/x"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["message"], "Invalid id");
    }
}

#[tokio::test]
async fn test_zero_id_names_the_resource() {
    let request = Request::builder()
        .uri("/api/ingredients/0")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid ingredient id");
}

#[tokio::test]
async fn test_register_validates_body() {
    let (status, body) = send(post_json(
        "/api/auth/register",
        json!({ "email": "not-an-email", "forename": "A", "surname": "B", "password": "short" }),
        None,
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("email"), "{message}");
    assert!(message.contains("password"), "{message}");
}

#[tokio::test]
async fn test_login_requires_json_content_type() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .body(Body::from(r#"{"email":"a@b.c","password":"x"}"#))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Missing 'Content-Type: application/json' header"
    );
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["paths"]["/api/recipes"].is_object());
}

fn current_user_request(subject: TokenSubject) -> Request<Body> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        subject,
        iat: now as usize,
        exp: (now + 600) as usize,
    };
    let token = sign_claims(&claims, &test_jwt_config()).unwrap();
    Request::builder()
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_token_gate_attaches_found_user() {
    let app = init_router(state_with_users(vec![test_user(&["user"])]));

    let response = app
        .oneshot(current_user_request(TokenSubject::nested(1)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "cook@example.com");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_token_gate_accepts_flat_subject() {
    let mut cook = test_user(&["admin"]);
    cook.id = 9;
    let app = init_router(state_with_users(vec![cook]));

    let response = app
        .oneshot(current_user_request(TokenSubject::Direct { id: 9 }))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], 9);
}

#[tokio::test]
async fn test_token_for_unknown_user_is_not_found() {
    let app = init_router(state_with_users(vec![test_user(&["user"])]));

    let response = app
        .oneshot(current_user_request(TokenSubject::nested(42)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], UNKNOWN_USER_MESSAGE);
    assert_eq!(
        UNKNOWN_USER_MESSAGE,
        "No user found matching supplied id, please login"
    );
}
