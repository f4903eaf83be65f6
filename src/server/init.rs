/**
 * Server Initialization
 *
 * Builds the application from configuration: connects the database,
 * runs migrations, assembles the state, and creates the router.
 */

use axum::Router;

use crate::auth::sessions::TokenKeys;
use crate::routes::create_router;
use crate::server::config::{connect_database, AppConfig, ConfigError};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. Connect the PostgreSQL pool and run migrations
/// 2. Build the session token keys from the configured secret
/// 3. Create the router with all routes and middleware
///
/// A missing database or secret aborts startup; there is no degraded
/// database-less mode.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing biblos backend server");

    let pool = connect_database(config).await?;

    let state = AppState {
        db: pool,
        tokens: TokenKeys::from_secret(&config.jwt_secret),
        cookie_secure: config.cookie_secure,
    };

    Ok(create_router(state))
}
