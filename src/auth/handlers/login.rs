/**
 * Login Handler
 *
 * Implements POST /user/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt
 * 3. Issue a session token
 * 4. Set the token as an HTTP-only cookie
 *
 * # Security
 *
 * - Lookup miss and password mismatch return the same 401 so account
 *   existence never leaks
 * - The token travels only in the cookie; it is not echoed in the body
 */

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json},
};
use bcrypt::verify;

use crate::auth::handlers::types::{LoginRequest, MessageResponse};
use crate::auth::sessions::TOKEN_TTL_SECS;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::middleware::auth::session_cookie;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401` - unknown email or wrong password (indistinguishable)
/// * `500` - storage, hashing, or token issuance failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("Login request for email: {}", request.email);

    let user = get_user_by_email(&state.db, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            ApiError::unauthorized("invalid email or password")
        })?;

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::internal("password verification failed")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(ApiError::unauthorized("invalid email or password"));
    }

    let token = state.tokens.issue(user.id).map_err(|e| {
        tracing::error!("Failed to issue token: {:?}", e);
        ApiError::internal("token issuance failed")
    })?;

    tracing::info!("User logged in: {} ({})", user.name, user.email);

    let cookie = session_cookie(&token, TOKEN_TTL_SECS, state.cookie_secure);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse::new("logged in")),
    ))
}
