//! Authentication Handlers Module
//!
//! HTTP handlers for the user-facing authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Session cookie clearing handler
//! └── me.rs       - Current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /user/register
//! - **`login`** - POST /user/login
//! - **`logout`** - GET /user/logout
//! - **`me`** - GET /user/me (behind the session middleware)

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, MessageResponse, RegisterRequest, UserPayload, UserResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::me;
pub use register::register;
