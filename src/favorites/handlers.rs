//! HTTP handlers for the favorites endpoints
//!
//! All three endpoints sit behind the session middleware; the
//! authenticated identity comes from the `CurrentUser` extractor.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::handlers::types::MessageResponse;
use crate::catalog::models::{Book, Payload};
use crate::error::ApiError;
use crate::favorites::db;
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;

/// Body of the favorites list payload
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteBooks {
    pub favorite_books: Vec<Book>,
}

/// GET /user/me/favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Payload<FavoriteBooks>>, ApiError> {
    let books = db::favorite_books(&state.db, user.id).await?;
    Ok(Json(Payload {
        payload: FavoriteBooks {
            favorite_books: books,
        },
    }))
}

/// POST /user/me/favorites/{book_id}
///
/// Idempotent; favoriting an already-favorited book succeeds without
/// change. The book id is not checked against the books table.
pub async fn add_favorite(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(book_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    db::add_favorite(&state.db, user.id, book_id).await?;
    tracing::info!("User {} favorited book {}", user.id, book_id);
    Ok(Json(MessageResponse::new("book favorited")))
}

/// DELETE /user/me/favorites/{book_id}
///
/// Idempotent; removing an absent favorite succeeds without change.
pub async fn remove_favorite(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(book_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    db::remove_favorite(&state.db, user.id, book_id).await?;
    tracing::info!("User {} unfavorited book {}", user.id, book_id);
    Ok(Json(MessageResponse::new("book unfavorited")))
}
