/**
 * Authentication Handler Types
 *
 * Request and response types shared by the register, login and profile
 * handlers.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's chosen username
    pub username: String,
    /// User's password (hashed before storage)
    pub password: String,
}

/// Registration response; echoes the created username only.
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub username: String,
}

/// Login form, submitted as `application/x-www-form-urlencoded`.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginForm {
    pub username: String,
    /// Verified against the stored bcrypt hash
    pub password: String,
}

/// Login response carrying the bearer token.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Signed JWT, 30 minute lifetime
    pub access_token: String,
    /// Always "bearer"
    pub token_type: String,
}

/// Profile response (no sensitive data).
#[derive(Serialize, Deserialize, Debug)]
pub struct ProfileResponse {
    pub id: i64,
    pub username: String,
}
