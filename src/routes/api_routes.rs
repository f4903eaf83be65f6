/**
 * API Route Configuration
 *
 * Defines the HTTP surface:
 *
 * # User routes
 * - `POST /user/register` - registration (public)
 * - `POST /user/login` - login, sets the session cookie (public)
 * - `GET /user/logout` - clears the session cookie (public)
 * - `GET /user/me` - current user (session required)
 * - `GET /user/me/favorites` - favorite books (session required)
 * - `POST /user/me/favorites/{book_id}` / `DELETE ...` - favorite
 *   add/remove (session required)
 *
 * # Catalog routes
 * - `GET /books`, `GET /books/{id}` - public reads
 * - `POST /books`, `PUT /books/{id}`, `DELETE /books/{id}` - admin
 *   writes (session required, role checked in the handlers)
 * - same shape for `/authors`, `/literary-groups`, `/periods`
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::auth::handlers::{login, logout, me, register};
use crate::catalog::handlers as catalog;
use crate::favorites::handlers as favorites;
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Build the API router
///
/// Protected routes are wrapped in the session middleware; public
/// routes are merged alongside. The same path may appear in both
/// routers with different methods (public read, protected write).
pub fn api_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        // Authentication endpoints
        .route("/user/register", post(register))
        .route("/user/login", post(login))
        .route("/user/logout", get(logout))
        // Catalog reads
        .route("/books", get(catalog::list_books))
        .route("/books/{id}", get(catalog::get_book))
        .route("/authors", get(catalog::list_authors))
        .route("/authors/{id}", get(catalog::get_author))
        .route("/literary-groups", get(catalog::list_literary_groups))
        .route("/literary-groups/{id}", get(catalog::get_literary_group))
        .route("/periods", get(catalog::list_periods))
        .route("/periods/{id}", get(catalog::get_period));

    let protected = Router::new()
        // Current user and favorites
        .route("/user/me", get(me))
        .route("/user/me/favorites", get(favorites::list_favorites))
        .route(
            "/user/me/favorites/{book_id}",
            post(favorites::add_favorite).delete(favorites::remove_favorite),
        )
        // Catalog writes (admin role checked in the handlers)
        .route("/books", post(catalog::create_book))
        .route(
            "/books/{id}",
            put(catalog::update_book).delete(catalog::delete_book),
        )
        .route("/authors", post(catalog::create_author))
        .route(
            "/authors/{id}",
            put(catalog::update_author).delete(catalog::delete_author),
        )
        .route("/literary-groups", post(catalog::create_literary_group))
        .route(
            "/literary-groups/{id}",
            put(catalog::update_literary_group).delete(catalog::delete_literary_group),
        )
        .route("/periods", post(catalog::create_period))
        .route(
            "/periods/{id}",
            put(catalog::update_period).delete(catalog::delete_period),
        )
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
