//! HTTP handlers for the catalog
//!
//! Thin handlers over `catalog::db`. Reads are public; writes require
//! the admin role, checked through the shared authorization policy.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::auth::handlers::types::MessageResponse;
use crate::auth::policy::{require_role, Role};
use crate::catalog::db;
use crate::catalog::models::{
    Author, AuthorPayload, Book, BookPayload, LiteraryGroup, LiteraryGroupPayload, Payload,
    Period, PeriodPayload,
};
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;

fn non_empty(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} is required")));
    }
    Ok(())
}

// ---- books ----

pub async fn list_books(
    State(state): State<AppState>,
) -> Result<Json<Payload<Vec<Book>>>, ApiError> {
    let books = db::list_books(&state.db).await?;
    Ok(Json(Payload { payload: books }))
}

pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Payload<Book>>, ApiError> {
    let book = db::get_book(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("book not found"))?;
    Ok(Json(Payload { payload: book }))
}

pub async fn create_book(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<BookPayload>,
) -> Result<(StatusCode, Json<Payload<Book>>), ApiError> {
    require_role(user.role, Role::Admin)?;
    non_empty(&payload.title, "title")?;

    let book = db::create_book(&state.db, &payload).await?;
    tracing::info!("Book created: {} ({})", book.title, book.id);
    Ok((StatusCode::CREATED, Json(Payload { payload: book })))
}

pub async fn update_book(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<BookPayload>,
) -> Result<Json<Payload<Book>>, ApiError> {
    require_role(user.role, Role::Admin)?;
    non_empty(&payload.title, "title")?;

    let book = db::update_book(&state.db, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("book not found"))?;
    Ok(Json(Payload { payload: book }))
}

pub async fn delete_book(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_role(user.role, Role::Admin)?;

    if !db::delete_book(&state.db, id).await? {
        return Err(ApiError::not_found("book not found"));
    }
    tracing::info!("Book deleted: {}", id);
    Ok(Json(MessageResponse::new("book deleted")))
}

// ---- authors ----

pub async fn list_authors(
    State(state): State<AppState>,
) -> Result<Json<Payload<Vec<Author>>>, ApiError> {
    let authors = db::list_authors(&state.db).await?;
    Ok(Json(Payload { payload: authors }))
}

pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Payload<Author>>, ApiError> {
    let author = db::get_author(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("author not found"))?;
    Ok(Json(Payload { payload: author }))
}

pub async fn create_author(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<AuthorPayload>,
) -> Result<(StatusCode, Json<Payload<Author>>), ApiError> {
    require_role(user.role, Role::Admin)?;
    non_empty(&payload.name, "name")?;

    let author = db::create_author(&state.db, &payload).await?;
    tracing::info!("Author created: {} ({})", author.name, author.id);
    Ok((StatusCode::CREATED, Json(Payload { payload: author })))
}

pub async fn update_author(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AuthorPayload>,
) -> Result<Json<Payload<Author>>, ApiError> {
    require_role(user.role, Role::Admin)?;
    non_empty(&payload.name, "name")?;

    let author = db::update_author(&state.db, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("author not found"))?;
    Ok(Json(Payload { payload: author }))
}

pub async fn delete_author(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_role(user.role, Role::Admin)?;

    // Books referencing this author keep their author_id; the dangling
    // reference resolves to nothing at read time.
    if !db::delete_author(&state.db, id).await? {
        return Err(ApiError::not_found("author not found"));
    }
    tracing::info!("Author deleted: {}", id);
    Ok(Json(MessageResponse::new("author deleted")))
}

// ---- literary groups ----

pub async fn list_literary_groups(
    State(state): State<AppState>,
) -> Result<Json<Payload<Vec<LiteraryGroup>>>, ApiError> {
    let groups = db::list_literary_groups(&state.db).await?;
    Ok(Json(Payload { payload: groups }))
}

pub async fn get_literary_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Payload<LiteraryGroup>>, ApiError> {
    let group = db::get_literary_group(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("literary group not found"))?;
    Ok(Json(Payload { payload: group }))
}

pub async fn create_literary_group(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<LiteraryGroupPayload>,
) -> Result<(StatusCode, Json<Payload<LiteraryGroup>>), ApiError> {
    require_role(user.role, Role::Admin)?;
    non_empty(&payload.name, "name")?;

    let group = db::create_literary_group(&state.db, &payload).await?;
    tracing::info!("Literary group created: {} ({})", group.name, group.id);
    Ok((StatusCode::CREATED, Json(Payload { payload: group })))
}

pub async fn update_literary_group(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<LiteraryGroupPayload>,
) -> Result<Json<Payload<LiteraryGroup>>, ApiError> {
    require_role(user.role, Role::Admin)?;
    non_empty(&payload.name, "name")?;

    let group = db::update_literary_group(&state.db, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("literary group not found"))?;
    Ok(Json(Payload { payload: group }))
}

pub async fn delete_literary_group(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_role(user.role, Role::Admin)?;

    if !db::delete_literary_group(&state.db, id).await? {
        return Err(ApiError::not_found("literary group not found"));
    }
    tracing::info!("Literary group deleted: {}", id);
    Ok(Json(MessageResponse::new("literary group deleted")))
}

// ---- periods ----

pub async fn list_periods(
    State(state): State<AppState>,
) -> Result<Json<Payload<Vec<Period>>>, ApiError> {
    let periods = db::list_periods(&state.db).await?;
    Ok(Json(Payload { payload: periods }))
}

pub async fn get_period(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Payload<Period>>, ApiError> {
    let period = db::get_period(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("period not found"))?;
    Ok(Json(Payload { payload: period }))
}

pub async fn create_period(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<PeriodPayload>,
) -> Result<(StatusCode, Json<Payload<Period>>), ApiError> {
    require_role(user.role, Role::Admin)?;
    non_empty(&payload.name, "name")?;

    let period = db::create_period(&state.db, &payload).await?;
    tracing::info!("Period created: {} ({})", period.name, period.id);
    Ok((StatusCode::CREATED, Json(Payload { payload: period })))
}

pub async fn update_period(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<PeriodPayload>,
) -> Result<Json<Payload<Period>>, ApiError> {
    require_role(user.role, Role::Admin)?;
    non_empty(&payload.name, "name")?;

    let period = db::update_period(&state.db, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("period not found"))?;
    Ok(Json(Payload { payload: period }))
}

pub async fn delete_period(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_role(user.role, Role::Admin)?;

    if !db::delete_period(&state.db, id).await? {
        return Err(ApiError::not_found("period not found"));
    }
    tracing::info!("Period deleted: {}", id);
    Ok(Json(MessageResponse::new("period deleted")))
}
