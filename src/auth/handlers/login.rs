/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Mint a bearer token
 *
 * # Security
 *
 * - Unknown-user and wrong-password failures return the identical 401
 *   response, so callers cannot enumerate usernames
 * - Password verification is constant-time via bcrypt
 */

use axum::extract::State;
use axum::response::Json;
use axum::Form;

use crate::auth::handlers::types::{LoginForm, TokenResponse};
use crate::auth::password::verify_password;
use crate::auth::tokens::{issue, DEFAULT_TTL};
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// Accepts form-encoded credentials and returns a bearer token valid for
/// 30 minutes.
///
/// # Errors
///
/// * `401 Unauthorized` - if the user is not found or the password is wrong
/// * `500 Internal Server Error` - if the lookup or token signing fails
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login request for username: {}", form.username);

    let user = get_user_by_username(&state.pool, &form.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed: unknown user");
            ApiError::Unauthorized
        })?;

    if !verify_password(&form.password, &user.password_hash) {
        tracing::warn!("Login failed: wrong password for {}", user.username);
        return Err(ApiError::Unauthorized);
    }

    let access_token = issue(&state.tokens, &user.username, DEFAULT_TTL)
        .map_err(|e| ApiError::Internal(format!("failed to sign token: {e}")))?;

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
