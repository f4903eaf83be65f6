//! Favorites Module
//!
//! Per-user favorite-book list with membership-only semantics. Add and
//! remove are idempotent; the list resolves references to current Book
//! rows at read time and silently drops references to deleted books.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{add_favorite, list_favorites, remove_favorite};
