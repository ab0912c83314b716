/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Check whether the username is already taken
 * 2. Hash the password using bcrypt
 * 3. Create the user in the database
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt and a per-call random salt
 * - Passwords are never logged or returned in responses
 */

use axum::extract::State;
use axum::response::Json;

use crate::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::auth::password::hash_password;
use crate::auth::users::{create_user, get_user_by_username};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Registration handler
///
/// # Errors
///
/// * `409 Conflict` - if the username is already registered
/// * `500 Internal Server Error` - if hashing or the insert fails
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    tracing::info!("Registration request for username: {}", request.username);

    if get_user_by_username(&state.pool, &request.username)
        .await?
        .is_some()
    {
        tracing::warn!("Username already registered: {}", request.username);
        return Err(ApiError::Conflict);
    }

    let password_hash = hash_password(&request.password)
        .map_err(|e| ApiError::Internal(format!("failed to hash password: {e}")))?;

    let user = create_user(&state.pool, &request.username, &password_hash).await?;

    tracing::info!("User created successfully: {}", user.username);

    Ok(Json(RegisterResponse {
        username: user.username,
    }))
}
