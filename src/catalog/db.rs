//! Database operations for the catalog
//!
//! Plain CRUD queries for books, authors, literary groups, and periods.
//! Deletes never check inbound references; a Book keeping the id of a
//! deleted Author is expected.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::catalog::models::{
    Author, AuthorPayload, Book, BookPayload, LiteraryGroup, LiteraryGroupPayload, Period,
    PeriodPayload,
};

// ---- books ----

pub async fn list_books(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, published_year, summary, author_id, created_at, updated_at
        FROM books
        ORDER BY title
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_book(pool: &PgPool, id: Uuid) -> Result<Option<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, published_year, summary, author_id, created_at, updated_at
        FROM books
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_book(pool: &PgPool, payload: &BookPayload) -> Result<Book, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO books (id, title, published_year, summary, author_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, title, published_year, summary, author_id, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&payload.title)
    .bind(payload.published_year)
    .bind(&payload.summary)
    .bind(payload.author_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn update_book(
    pool: &PgPool,
    id: Uuid,
    payload: &BookPayload,
) -> Result<Option<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        UPDATE books
        SET title = $1, published_year = $2, summary = $3, author_id = $4, updated_at = $5
        WHERE id = $6
        RETURNING id, title, published_year, summary, author_id, created_at, updated_at
        "#,
    )
    .bind(&payload.title)
    .bind(payload.published_year)
    .bind(&payload.summary)
    .bind(payload.author_id)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_book(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM books WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ---- authors ----

pub async fn list_authors(pool: &PgPool) -> Result<Vec<Author>, sqlx::Error> {
    sqlx::query_as::<_, Author>(
        r#"
        SELECT id, name, bio, literary_group_id, period_id, created_at, updated_at
        FROM authors
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_author(pool: &PgPool, id: Uuid) -> Result<Option<Author>, sqlx::Error> {
    sqlx::query_as::<_, Author>(
        r#"
        SELECT id, name, bio, literary_group_id, period_id, created_at, updated_at
        FROM authors
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_author(pool: &PgPool, payload: &AuthorPayload) -> Result<Author, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Author>(
        r#"
        INSERT INTO authors (id, name, bio, literary_group_id, period_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, bio, literary_group_id, period_id, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&payload.name)
    .bind(&payload.bio)
    .bind(payload.literary_group_id)
    .bind(payload.period_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn update_author(
    pool: &PgPool,
    id: Uuid,
    payload: &AuthorPayload,
) -> Result<Option<Author>, sqlx::Error> {
    sqlx::query_as::<_, Author>(
        r#"
        UPDATE authors
        SET name = $1, bio = $2, literary_group_id = $3, period_id = $4, updated_at = $5
        WHERE id = $6
        RETURNING id, name, bio, literary_group_id, period_id, created_at, updated_at
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.bio)
    .bind(payload.literary_group_id)
    .bind(payload.period_id)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_author(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM authors WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ---- literary groups ----

pub async fn list_literary_groups(pool: &PgPool) -> Result<Vec<LiteraryGroup>, sqlx::Error> {
    sqlx::query_as::<_, LiteraryGroup>(
        r#"
        SELECT id, name, description, period_id, created_at, updated_at
        FROM literary_groups
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_literary_group(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<LiteraryGroup>, sqlx::Error> {
    sqlx::query_as::<_, LiteraryGroup>(
        r#"
        SELECT id, name, description, period_id, created_at, updated_at
        FROM literary_groups
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_literary_group(
    pool: &PgPool,
    payload: &LiteraryGroupPayload,
) -> Result<LiteraryGroup, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, LiteraryGroup>(
        r#"
        INSERT INTO literary_groups (id, name, description, period_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, description, period_id, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.period_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn update_literary_group(
    pool: &PgPool,
    id: Uuid,
    payload: &LiteraryGroupPayload,
) -> Result<Option<LiteraryGroup>, sqlx::Error> {
    sqlx::query_as::<_, LiteraryGroup>(
        r#"
        UPDATE literary_groups
        SET name = $1, description = $2, period_id = $3, updated_at = $4
        WHERE id = $5
        RETURNING id, name, description, period_id, created_at, updated_at
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(payload.period_id)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_literary_group(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM literary_groups WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ---- periods ----

pub async fn list_periods(pool: &PgPool) -> Result<Vec<Period>, sqlx::Error> {
    sqlx::query_as::<_, Period>(
        r#"
        SELECT id, name, start_year, end_year, description, created_at, updated_at
        FROM periods
        ORDER BY start_year NULLS LAST, name
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_period(pool: &PgPool, id: Uuid) -> Result<Option<Period>, sqlx::Error> {
    sqlx::query_as::<_, Period>(
        r#"
        SELECT id, name, start_year, end_year, description, created_at, updated_at
        FROM periods
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_period(pool: &PgPool, payload: &PeriodPayload) -> Result<Period, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Period>(
        r#"
        INSERT INTO periods (id, name, start_year, end_year, description, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, start_year, end_year, description, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&payload.name)
    .bind(payload.start_year)
    .bind(payload.end_year)
    .bind(&payload.description)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn update_period(
    pool: &PgPool,
    id: Uuid,
    payload: &PeriodPayload,
) -> Result<Option<Period>, sqlx::Error> {
    sqlx::query_as::<_, Period>(
        r#"
        UPDATE periods
        SET name = $1, start_year = $2, end_year = $3, description = $4, updated_at = $5
        WHERE id = $6
        RETURNING id, name, start_year, end_year, description, created_at, updated_at
        "#,
    )
    .bind(&payload.name)
    .bind(payload.start_year)
    .bind(payload.end_year)
    .bind(&payload.description)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_period(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM periods WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
