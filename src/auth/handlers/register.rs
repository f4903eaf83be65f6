/**
 * Registration Handler
 *
 * Implements POST /user/register.
 *
 * # Registration Process
 *
 * 1. Validate name, email format, and password length
 * 2. Check that no user exists with the same email
 * 3. Hash the password with bcrypt
 * 4. Create the user with the default `user` role
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt DEFAULT_COST; plaintext is never
 *   stored or logged
 * - The duplicate check is backed by a unique index, so a racing insert
 *   still surfaces as a conflict
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 8;

/// Registration handler
///
/// # Errors
///
/// * `400` - missing name, malformed email, or short password
/// * `409` - email already registered
/// * `500` - hashing or storage failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    tracing::info!("Registration request for email: {}", request.email);

    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name is required"));
    }

    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(ApiError::validation("invalid email format"));
    }

    if request.password.len() < MIN_PASSWORD_LEN {
        tracing::warn!("Password too short");
        return Err(ApiError::validation(
            "password must be at least 8 characters",
        ));
    }

    if get_user_by_email(&state.db, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(ApiError::conflict("Email already registered"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::internal("password hashing failed")
    })?;

    let user = create_user(&state.db, request.name, request.email, password_hash).await?;

    tracing::info!("User created: {} ({})", user.name, user.email);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("account created")),
    ))
}
