//! Server Module
//!
//! Configuration loading, shared application state and app assembly.

/// Environment-driven configuration (startup-fatal when incomplete)
pub mod config;

/// Shared application state
pub mod state;

/// Pool creation, migrations and router assembly
pub mod init;

pub use config::{CatalogConfig, Config, ConfigError};
pub use state::AppState;
