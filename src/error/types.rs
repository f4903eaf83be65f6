/**
 * API Error Types
 *
 * This module defines the error taxonomy for the backend. The variants
 * mirror the failure classes the HTTP surface exposes:
 *
 * - `Validation` - missing or malformed required fields (400)
 * - `NotFound` - an id with no matching record (404)
 * - `Unauthorized` - missing, invalid, or expired credential (401)
 * - `Forbidden` - authenticated but wrong role (403)
 * - `Conflict` - duplicate unique field, e.g. email (409)
 * - `Database` / `Internal` - unexpected storage failure (500)
 *
 * Storage errors convert via `From<sqlx::Error>`, with the Postgres
 * unique-violation code mapped to `Conflict` so a duplicate insert that
 * races past a pre-check still surfaces correctly.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Postgres error code for a unique-constraint violation.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Backend error taxonomy
///
/// Each variant carries a human-readable message that is safe to return
/// to clients. Internal detail from storage failures goes to the log,
/// never into the message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required field
    #[error("{message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Entity id has no matching record
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Missing, invalid, or expired credential
    #[error("{message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Authenticated but lacking the required role
    #[error("{message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Duplicate value for a unique field
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected storage failure
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Any other unexpected failure
    #[error("{message}")]
    Internal {
        /// Internal detail, logged but not returned to clients
        message: String,
    },
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message for this error
    ///
    /// Storage and internal failures collapse to a generic message; the
    /// detail is logged by the `IntoResponse` conversion instead.
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::NotFound { message }
            | Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::Conflict { message } => message.clone(),
            Self::Database(_) | Self::Internal { .. } => "internal server error".to_string(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
                return Self::Conflict {
                    message: "duplicate value for a unique field".to_string(),
                };
            }
        }
        Self::Database(err)
    }
}
