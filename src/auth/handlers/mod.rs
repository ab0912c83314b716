//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /login - User authentication (form-encoded)
//! - **`profile`** - GET /profile - Current user info

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handler
pub mod profile;

pub use types::{LoginForm, ProfileResponse, RegisterRequest, RegisterResponse, TokenResponse};

pub use login::login;
pub use profile::profile;
pub use register::register;
