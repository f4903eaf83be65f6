//! Authentication test helpers
//!
//! Utilities for building a test server, creating users, and driving
//! the login flow through the real HTTP surface.

use axum_test::TestServer;
use sqlx::PgPool;
use uuid::Uuid;

use biblos::auth::sessions::TokenKeys;
use biblos::auth::users::{create_user, User};
use biblos::routes::create_router;
use biblos::server::state::AppState;

/// Signing secret used by every integration test server.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build application state around a test pool
pub fn test_state(pool: &PgPool) -> AppState {
    AppState {
        db: pool.clone(),
        tokens: TokenKeys::from_secret(TEST_JWT_SECRET),
        cookie_secure: false,
    }
}

/// Build a test server that persists cookies across requests
pub fn test_server(pool: &PgPool) -> TestServer {
    let app = create_router(test_state(pool));
    let mut server = TestServer::new(app).expect("Failed to start test server");
    server.save_cookies();
    server
}

/// Create a user directly in the database
pub async fn create_test_user(pool: &PgPool, name: &str, email: &str, password: &str) -> User {
    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST).expect("bcrypt hash failed");
    create_user(pool, name.to_string(), email.to_string(), password_hash)
        .await
        .expect("Failed to create test user")
}

/// Give a user the admin role
pub async fn promote_to_admin(pool: &PgPool, user_id: Uuid) {
    sqlx::query("UPDATE users SET role = 'admin' WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("Failed to promote user");
}

/// Register and log in through the HTTP surface
///
/// Leaves the session cookie in the server's cookie store.
pub async fn signup_and_login(server: &TestServer, name: &str, email: &str, password: &str) {
    let response = server
        .post("/user/register")
        .json(&serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code(), axum::http::StatusCode::CREATED);

    let response = server
        .post("/user/login")
        .json(&serde_json::json!({
            "email": email,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code(), axum::http::StatusCode::OK);
}
