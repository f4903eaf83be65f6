/**
 * Current User Handler
 *
 * Implements GET /user/me. The session middleware has already verified
 * the cookie and resolved the user row; this handler only shapes the
 * response.
 */

use axum::response::Json;

use crate::auth::handlers::types::{UserPayload, UserResponse};
use crate::middleware::auth::CurrentUser;

/// Current user handler
///
/// Returns the authenticated user's public fields wrapped in the
/// `{"payload": ...}` envelope.
pub async fn me(user: CurrentUser) -> Json<UserPayload> {
    Json(UserPayload {
        payload: UserResponse::from(user),
    })
}
