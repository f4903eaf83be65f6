//! API Error Module
//!
//! This module defines the error taxonomy used across the backend.
//! Every failure a handler can produce is an `ApiError`, and every
//! `ApiError` converts to a JSON HTTP response at the handler boundary.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
