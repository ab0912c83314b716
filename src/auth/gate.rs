/**
 * Auth Gate
 *
 * This module provides the extractor guarding every protected route. It
 * resolves the `Authorization: Bearer <token>` header to a concrete user
 * record with favorites loaded, and is the single precondition shared by
 * profile, catalog and favorites handlers.
 *
 * Every failure mode (missing header, bad signature, expired token,
 * empty or unknown subject) collapses to the same `Unauthorized` error
 * so responses never reveal which check failed.
 */

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::tokens::verify;
use crate::auth::users::{get_user_with_favorites, UserWithFavorites};
use crate::error::ApiError;
use crate::server::state::AppState;

/// The authenticated principal for a request, with favorites attached.
///
/// Use as a handler parameter to require authentication:
///
/// ```rust,ignore
/// async fn handler(CurrentUser(user): CurrentUser) { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserWithFavorites);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                ApiError::Unauthorized
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            ApiError::Unauthorized
        })?;

        let subject = verify(&state.tokens, token).map_err(|_| ApiError::Unauthorized)?;
        if subject.is_empty() {
            tracing::warn!("Token carries an empty subject");
            return Err(ApiError::Unauthorized);
        }

        // Database failures here are genuine 500s and must not masquerade
        // as bad credentials.
        let user = get_user_with_favorites(&state.pool, &subject)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Token subject no longer exists");
                ApiError::Unauthorized
            })?;

        Ok(CurrentUser(user))
    }
}
