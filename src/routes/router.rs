/**
 * Router Configuration
 *
 * Combines the API routes, the static asset mount, and the fallback
 * handler into the final Axum router.
 */

use axum::Router;
use tower_http::services::ServeDir;

use crate::error::ApiError;
use crate::routes::api_routes::api_router;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// 1. **API routes**: user, favorites, catalog
/// 2. **Static files**: served from the `public` directory
/// 3. **Fallback**: JSON 404 for unknown routes
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = api_router(app_state.clone());

    // Static file serving for the SPA bundle
    let router = router.nest_service("/static", ServeDir::new("public"));

    // Fallback handler for unknown routes
    let router = router.fallback(|| async { ApiError::not_found("no such route") });

    router.with_state(app_state)
}
