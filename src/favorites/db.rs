//! Database operations for favorite books
//!
//! Membership-only semantics on the `user_favorites` table. Add and
//! remove are idempotent single statements; concurrent calls for the
//! same user race at the storage layer and last write wins.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::catalog::models::Book;

/// Ensure `book_id` is in the user's favorite set
///
/// The book is not required to exist; a dangling reference is accepted.
pub async fn add_favorite(pool: &PgPool, user_id: Uuid, book_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_favorites (user_id, book_id, added_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, book_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(book_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// Ensure `book_id` is absent from the user's favorite set
pub async fn remove_favorite(
    pool: &PgPool,
    user_id: Uuid,
    book_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM user_favorites WHERE user_id = $1 AND book_id = $2")
        .bind(user_id)
        .bind(book_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Resolve the user's favorite references to current Book rows
///
/// Lazy join at read time. A reference whose Book was deleted produces
/// no row and is silently dropped; the membership entry itself stays
/// until removed explicitly.
pub async fn favorite_books(pool: &PgPool, user_id: Uuid) -> Result<Vec<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        SELECT b.id, b.title, b.published_year, b.summary, b.author_id, b.created_at, b.updated_at
        FROM user_favorites f
        JOIN books b ON b.id = f.book_id
        WHERE f.user_id = $1
        ORDER BY f.added_at
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
