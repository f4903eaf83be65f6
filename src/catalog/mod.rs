//! Catalog Module
//!
//! CRUD for the four catalog entities: Book, Author, LiteraryGroup, and
//! Period. Records are plain rows with required name/title fields and
//! optional cross-references. Referential integrity on delete is not
//! enforced; dangling references resolve to nothing at read time.

/// Entity models and request payloads
pub mod models;

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use models::{Author, Book, LiteraryGroup, Payload, Period};
