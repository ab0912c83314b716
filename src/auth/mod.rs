//! Authentication Module
//!
//! This module handles user registration, credential verification and
//! stateless bearer-token sessions.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── password.rs     - bcrypt hashing and verification
//! ├── tokens.rs       - JWT issue/verify (TokenConfig)
//! ├── users.rs        - User model and database operations
//! ├── gate.rs         - CurrentUser extractor (the auth gate)
//! └── handlers/       - HTTP handlers (register, login, profile)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → bcrypt hash stored
//! 2. **Login**: credentials verified → signed token returned (30 min TTL)
//! 3. **Protected request**: `Authorization: Bearer <token>` → `CurrentUser`
//!    extractor verifies the token and loads the user with favorites
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are signed JWTs; no server-side session state
//! - All authentication failures return a uniform 401

/// bcrypt hashing and verification
pub mod password;

/// Token issue and verification
pub mod tokens;

/// User model and database operations
pub mod users;

/// CurrentUser extractor guarding protected routes
pub mod gate;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use gate::CurrentUser;
pub use handlers::{login, profile, register};
pub use tokens::TokenConfig;
