//! Favorites integration tests
//!
//! Exercises the idempotent add/remove semantics and the lazy join that
//! resolves favorite references to Book rows.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serial_test::serial;
use uuid::Uuid;

use biblos::catalog::db::{create_book, delete_book};
use biblos::catalog::models::BookPayload;
use common::auth_helpers::{signup_and_login, test_server};
use common::database::TestDatabase;

fn book_payload(title: &str) -> BookPayload {
    BookPayload {
        title: title.to_string(),
        published_year: Some(1925),
        summary: None,
        author_id: None,
    }
}

async fn favorite_ids(server: &axum_test::TestServer) -> Vec<String> {
    let response = server.get("/user/me/favorites").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    body["payload"]["favoriteBooks"]
        .as_array()
        .expect("favoriteBooks should be an array")
        .iter()
        .map(|book| book["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
#[serial]
async fn test_favorites_require_session() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());

    let response = server.get("/user/me/favorites").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server
        .post(&format!("/user/me/favorites/{}", Uuid::new_v4()))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn test_add_and_list_favorites() {
    let db = TestDatabase::new().await;
    let book = create_book(db.pool(), &book_payload("The Trial")).await.unwrap();

    let server = test_server(db.pool());
    signup_and_login(&server, "A", "a@x.com", "secret-password").await;

    let response = server
        .post(&format!("/user/me/favorites/{}", book.id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    assert_eq!(favorite_ids(&server).await, vec![book.id.to_string()]);
}

#[tokio::test]
#[serial]
async fn test_add_favorite_is_idempotent() {
    let db = TestDatabase::new().await;
    let book = create_book(db.pool(), &book_payload("The Trial")).await.unwrap();

    let server = test_server(db.pool());
    signup_and_login(&server, "A", "a@x.com", "secret-password").await;

    for _ in 0..2 {
        let response = server
            .post(&format!("/user/me/favorites/{}", book.id))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    assert_eq!(favorite_ids(&server).await.len(), 1);
}

#[tokio::test]
#[serial]
async fn test_add_then_remove_restores_set() {
    let db = TestDatabase::new().await;
    let book = create_book(db.pool(), &book_payload("The Trial")).await.unwrap();

    let server = test_server(db.pool());
    signup_and_login(&server, "A", "a@x.com", "secret-password").await;

    server
        .post(&format!("/user/me/favorites/{}", book.id))
        .await;
    let response = server
        .delete(&format!("/user/me/favorites/{}", book.id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    assert!(favorite_ids(&server).await.is_empty());
}

#[tokio::test]
#[serial]
async fn test_remove_absent_favorite_succeeds() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());
    signup_and_login(&server, "A", "a@x.com", "secret-password").await;

    let response = server
        .delete(&format!("/user/me/favorites/{}", Uuid::new_v4()))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn test_dangling_favorite_accepted_and_dropped_from_list() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());
    signup_and_login(&server, "A", "a@x.com", "secret-password").await;

    // No such book; the reference is stored anyway.
    let response = server
        .post(&format!("/user/me/favorites/{}", Uuid::new_v4()))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // The lazy join finds no row, so the list is empty.
    assert!(favorite_ids(&server).await.is_empty());
}

#[tokio::test]
#[serial]
async fn test_deleted_book_dropped_from_list() {
    let db = TestDatabase::new().await;
    let book = create_book(db.pool(), &book_payload("The Trial")).await.unwrap();

    let server = test_server(db.pool());
    signup_and_login(&server, "A", "a@x.com", "secret-password").await;

    server
        .post(&format!("/user/me/favorites/{}", book.id))
        .await;
    assert_eq!(favorite_ids(&server).await.len(), 1);

    delete_book(db.pool(), book.id).await.unwrap();

    assert!(favorite_ids(&server).await.is_empty());
}

#[tokio::test]
#[serial]
async fn test_malformed_book_id_is_bad_request() {
    let db = TestDatabase::new().await;
    let server = test_server(db.pool());
    signup_and_login(&server, "A", "a@x.com", "secret-password").await;

    let response = server.post("/user/me/favorites/not-a-uuid").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
