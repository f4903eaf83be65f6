/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * initializes the PostgreSQL connection pool.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - Postgres connection string (required)
 * - `JWT_SECRET` - session token signing secret (required; there is no
 *   built-in fallback value)
 * - `SERVER_PORT` - listen port, defaults to 3000
 * - `COOKIE_SECURE` - set to `true`/`1` in production so the session
 *   cookie carries the `Secure` flag
 *
 * # Error Handling
 *
 * Every operation in this system is a database operation, so a missing
 * `DATABASE_URL` or an unreachable database fails startup instead of
 * degrading into a database-less mode.
 */

use sqlx::PgPool;
use thiserror::Error;

/// Configuration errors surfaced at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Application configuration loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string
    pub database_url: String,
    /// Session token signing secret
    pub jwt_secret: String,
    /// Listen port
    pub port: u16,
    /// Whether the session cookie carries the `Secure` flag
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .unwrap_or(3000);

        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            cookie_secure,
        })
    }
}

/// Connect to the database and run migrations
///
/// # Returns
/// Connection pool, or an error that should abort startup
pub async fn connect_database(config: &AppConfig) -> Result<PgPool, ConfigError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_database_url_is_an_error() {
        // from_env reads the process environment; only assert the error
        // shape when the variable is genuinely absent.
        if std::env::var("DATABASE_URL").is_err() {
            let err = AppConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));
        }
    }
}
