/**
 * Session Middleware
 *
 * This middleware protects routes that require an authenticated user.
 * It reads the session token from the `token` cookie, verifies it, and
 * resolves the user against the database so handlers always see a live
 * identity (a token for a deleted account is unauthorized).
 *
 * The gate is request-scoped: no retry, no backoff, no caching of
 * verification results.
 */

use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::auth::policy::Role;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Cookie name for the session token
pub const SESSION_COOKIE: &str = "token";

/// Authenticated user resolved by the session middleware
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Authentication middleware
///
/// 1. Reads the session token from the `token` cookie
/// 2. Verifies the token signature and expiry
/// 3. Resolves the user row for the token's subject
/// 4. Attaches a [`CurrentUser`] to request extensions
///
/// Returns 401 Unauthorized if any step fails. The failure kind is not
/// surfaced to the client.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| {
            tracing::warn!("Missing session cookie");
            ApiError::unauthorized("authentication required")
        })?;

    let claims = state.tokens.verify(&token).map_err(|e| {
        tracing::warn!("Invalid session token: {:?}", e);
        ApiError::unauthorized("authentication required")
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        ApiError::unauthorized("authentication required")
    })?;

    let user = get_user_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Session token for unknown user: {}", user_id);
            ApiError::unauthorized("authentication required")
        })?;

    request.extensions_mut().insert(CurrentUser {
        id: user.id,
        name: user.name,
        email: user.email,
        role: Role::parse(&user.role),
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Handlers behind [`auth_middleware`] take `user: CurrentUser` as a
/// parameter; the value was placed in request extensions by the
/// middleware.
impl axum::extract::FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            tracing::warn!("CurrentUser not found in request extensions");
            ApiError::unauthorized("authentication required")
        })
    }
}

/// Build the `Set-Cookie` value for a freshly issued session token
///
/// HTTP-only and `SameSite=Lax`, with a max age matching the token
/// lifetime. The `Secure` flag is added when `secure` is set (production
/// configuration).
pub fn session_cookie(token: &str, max_age_secs: u64, secure: bool) -> String {
    let secure_flag = if secure { "; Secure" } else { "" };
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}{}",
        SESSION_COOKIE, token, max_age_secs, secure_flag
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc123", 86400, false);
        assert!(cookie.starts_with("token=abc123;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_session_cookie_secure_in_production() {
        let cookie = session_cookie("abc123", 86400, true);
        assert!(cookie.ends_with("; Secure"));
    }
}
