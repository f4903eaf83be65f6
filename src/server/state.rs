/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations Axum uses for state extraction.
 *
 * # Thread Safety
 *
 * The pool and token keys are cheaply cloneable and thread-safe; there
 * is no in-process shared mutable state beyond the connection pool.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::sessions::TokenKeys;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `db` - PostgreSQL connection pool
/// * `tokens` - session token signing/verification keys
/// * `cookie_secure` - whether the session cookie carries `Secure`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Session token keys built from the configured secret
    pub tokens: TokenKeys,
    /// Whether issued cookies carry the `Secure` flag
    pub cookie_secure: bool,
}

/// Allow handlers to extract the pool directly with `State(PgPool)`.
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Allow handlers to extract the token keys directly.
impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
