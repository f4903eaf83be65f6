//! Biblos - Literary Catalog Backend
//!
//! Biblos is the REST backend for a literary-catalog content manager:
//! Books, Authors, Literary Groups, and Periods with CRUD operations,
//! cookie-based session authentication, and a per-user favorites list.
//!
//! # Module Structure
//!
//! - **`auth`** - registration, login, session tokens, authorization
//!   policy
//! - **`catalog`** - CRUD for the four catalog entities
//! - **`favorites`** - per-user favorite-book membership
//! - **`middleware`** - session middleware and the `CurrentUser`
//!   extractor
//! - **`routes`** - router assembly
//! - **`server`** - configuration, state, app creation
//! - **`error`** - the `ApiError` taxonomy and HTTP conversion
//!
//! # Request Flow
//!
//! Client logs in → session token set as an HTTP-only cookie → the
//! session middleware verifies the cookie on protected routes and
//! resolves the user → handlers act on behalf of that identity and
//! convert every failure to a JSON error body via `ApiError`.

/// Authentication and user management
pub mod auth;

/// Catalog entities and CRUD
pub mod catalog;

/// API error types
pub mod error;

/// Per-user favorite books
pub mod favorites;

/// Request-processing middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

pub use error::ApiError;
pub use server::{create_app, AppConfig, AppState};
