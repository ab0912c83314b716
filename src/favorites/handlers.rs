/**
 * Favorites HTTP Handlers
 *
 * Handlers for POST /movies/favorites and DELETE /movies/favorites/{id}.
 * Both routes require authentication via the `CurrentUser` extractor.
 */

use axum::extract::{Path, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::auth::gate::CurrentUser;
use crate::error::ApiError;
use crate::favorites::db::FilmPayload;
use crate::favorites::manager;
use crate::server::state::AppState;

/// Response for a successful favorite add.
#[derive(Serialize, Deserialize, Debug)]
pub struct FavoriteAddedResponse {
    pub message: String,
    pub movie: FilmPayload,
}

/// Response for a successful favorite removal.
#[derive(Serialize, Deserialize, Debug)]
pub struct FavoriteRemovedResponse {
    pub message: String,
    pub movie_id: i64,
}

/// POST /movies/favorites
///
/// Idempotent: adding a film already in the set leaves state unchanged
/// and returns the same success response.
pub async fn add_favorite(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Json(data): Json<FilmPayload>,
) -> Result<Json<FavoriteAddedResponse>, ApiError> {
    let film = manager::add(&state.pool, principal.user.id, &data).await?;

    Ok(Json(FavoriteAddedResponse {
        message: "Movie added to favorites".to_string(),
        movie: film.into(),
    }))
}

/// DELETE /movies/favorites/{film_id}
///
/// The path parameter is the external catalog film id, not the internal
/// row id.
pub async fn remove_favorite(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    Path(film_id): Path<i64>,
) -> Result<Json<FavoriteRemovedResponse>, ApiError> {
    let film = manager::remove(&state.pool, principal.user.id, film_id).await?;

    Ok(Json(FavoriteRemovedResponse {
        message: "Movie removed from favorites".to_string(),
        movie_id: film.film_id,
    }))
}
