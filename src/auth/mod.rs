//! Authentication Module
//!
//! User authentication, registration, and session management.
//!
//! # Architecture
//!
//! - **`users`** - user model and database operations
//! - **`sessions`** - session token issuance and verification
//! - **`policy`** - role parsing and the authorization policy function
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → user created
//! 2. **Login**: email, password verified → token set as HTTP-only cookie
//! 3. **Protected request**: cookie verified by the session middleware →
//!    identity attached to the request
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Session tokens are stateless JWTs with a one-day lifetime
//! - Invalid credentials return 401 without leaking account existence

/// User model and database operations
pub mod users;

/// Session token issuance and verification
pub mod sessions;

/// Role parsing and authorization policy
pub mod policy;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used items
pub use handlers::{login, logout, me, register};
pub use policy::{require_role, Role};
pub use sessions::TokenKeys;
