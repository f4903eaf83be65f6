//! Authentication integration tests
//!
//! Drives registration, login, logout, and the current-user endpoint
//! through the real router with a live test database.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serial_test::serial;

use common::auth_helpers::{signup_and_login, test_server};
use common::database::TestDatabase;

#[tokio::test]
#[serial]
async fn test_register_success() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());

    let response = server
        .post("/user/register")
        .json(&serde_json::json!({
            "name": "A",
            "email": "a@x.com",
            "password": "secret-password",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert!(body.get("message").is_some());
}

#[tokio::test]
#[serial]
async fn test_register_duplicate_email_conflicts() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());

    let payload = serde_json::json!({
        "name": "A",
        "email": "a@x.com",
        "password": "secret-password",
    });

    let response = server.post("/user/register").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    // Same email, different password: still a conflict.
    let response = server
        .post("/user/register")
        .json(&serde_json::json!({
            "name": "B",
            "email": "a@x.com",
            "password": "another-password",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
#[serial]
async fn test_register_invalid_email() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());

    let response = server
        .post("/user/register")
        .json(&serde_json::json!({
            "name": "A",
            "email": "not-an-email",
            "password": "secret-password",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn test_register_short_password() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());

    let response = server
        .post("/user/register")
        .json(&serde_json::json!({
            "name": "A",
            "email": "a@x.com",
            "password": "short",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn test_login_sets_http_only_cookie() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());

    signup_and_login(&server, "A", "a@x.com", "secret-password").await;

    let response = server
        .post("/user/login")
        .json(&serde_json::json!({
            "email": "a@x.com",
            "password": "secret-password",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let cookie = response.cookie("token");
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));
}

#[tokio::test]
#[serial]
async fn test_login_wrong_password() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());

    signup_and_login(&server, "A", "a@x.com", "secret-password").await;

    let response = server
        .post("/user/login")
        .json(&serde_json::json!({
            "email": "a@x.com",
            "password": "wrong-password",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn test_login_unknown_email_same_error() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());

    let response = server
        .post("/user/login")
        .json(&serde_json::json!({
            "email": "nobody@x.com",
            "password": "whatever-password",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn test_me_without_cookie() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());

    let response = server.get("/user/me").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn test_me_with_invalid_cookie() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());

    let response = server
        .get("/user/me")
        .add_header("cookie", "token=not-a-real-token")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn test_login_then_me_returns_same_identity() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());

    signup_and_login(&server, "A", "a@x.com", "secret-password").await;

    let response = server.get("/user/me").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["payload"]["email"], "a@x.com");
    assert_eq!(body["payload"]["name"], "A");
    assert_eq!(body["payload"]["role"], "user");
    // Never leak credentials, hashed or otherwise.
    assert!(body["payload"].get("password_hash").is_none());
}

#[tokio::test]
#[serial]
async fn test_logout_clears_session() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());

    signup_and_login(&server, "A", "a@x.com", "secret-password").await;
    assert_eq!(server.get("/user/me").await.status_code(), StatusCode::OK);

    let response = server.get("/user/logout").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.get("/user/me").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
