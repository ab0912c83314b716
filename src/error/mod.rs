//! API Error Types
//!
//! This module defines the error taxonomy surfaced by HTTP handlers and the
//! conversion into HTTP responses.
//!
//! # Error Categories
//!
//! - `Conflict` - duplicate username on registration
//! - `Unauthorized` - bad credentials, invalid/expired/malformed token, or
//!   unknown subject; always carries the same generic message so callers
//!   cannot enumerate users
//! - `NotFound` - favorite not present for removal
//! - `Favorites` - underlying persistence failure while adding a favorite
//! - `Database` / `Internal` - unexpected server-side failures (500)
//!
//! Every failure serializes as a JSON body of the form `{"detail": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

/// All errors that can surface from a request handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Username is already registered.
    #[error("Username already registered")]
    Conflict,

    /// Authentication failed. One variant for every cause (wrong password,
    /// unknown user, bad token) so responses never leak which check failed.
    #[error("Invalid authentication credentials")]
    Unauthorized,

    /// Favorite not present for the requesting user.
    #[error("Movie not found in your favorites")]
    NotFound,

    /// Persistence failure while adding a favorite, with the causing detail.
    #[error("Failed to add movie to favorites: {0}")]
    Favorites(String),

    /// Unexpected database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other unexpected server-side failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Conflict => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Favorites(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server-side failures are logged with full detail but surface as a
        // generic message.
        let detail = match &self {
            Self::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Internal server error".to_string()
            }
            Self::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
