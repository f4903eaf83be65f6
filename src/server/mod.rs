//! Server Module
//!
//! Server-side infrastructure: configuration loading, application
//! state, and app creation.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Configuration loading and pool setup
//! └── init.rs   - App creation
//! ```

/// Configuration loading and validation
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
