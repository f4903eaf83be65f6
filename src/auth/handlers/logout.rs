/**
 * Logout Handler
 *
 * Implements GET /user/logout. Clears the session cookie; the token
 * itself stays valid until expiry (stateless verification), the browser
 * just stops sending it.
 */

use axum::response::Json;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::CookieJar;

use crate::auth::handlers::types::MessageResponse;
use crate::middleware::auth::SESSION_COOKIE;

/// Logout handler
///
/// Always succeeds, with or without an existing session.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    (jar, Json(MessageResponse::new("logged out")))
}
