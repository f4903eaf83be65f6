//! Middleware Module
//!
//! HTTP middleware for the backend server. Currently provides:
//!
//! - **`auth`** - session middleware for protecting routes

pub mod auth;

pub use auth::{auth_middleware, session_cookie, CurrentUser, SESSION_COOKIE};
