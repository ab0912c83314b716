/**
 * Router Configuration
 *
 * This module wires every HTTP route to its handler.
 *
 * # Routes
 *
 * ## Public
 * - `POST /register` - User registration
 * - `POST /login` - User login (form-encoded), returns a bearer token
 *
 * ## Protected (Authorization: Bearer <token>)
 * - `GET /profile` - Current user info
 * - `GET /movies/search` - Catalog keyword search
 * - `GET /movies` - Catalog detail pass-through
 * - `POST /movies/favorites` - Add a film to favorites
 * - `DELETE /movies/favorites/{film_id}` - Remove a film from favorites
 *
 * Protected routes enforce authentication through the `CurrentUser`
 * extractor in their handler signatures; there is no separate middleware
 * layer.
 */

use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, post};
use axum::Router;
use serde_json::json;

use crate::auth::{login, profile, register};
use crate::catalog::{movie_details, search_movies};
use crate::favorites::{add_favorite, remove_favorite};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState) -> Router<()> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/profile", get(profile))
        .route("/movies/search", get(search_movies))
        .route("/movies", get(movie_details))
        .route("/movies/favorites", post(add_favorite))
        .route("/movies/favorites/{film_id}", delete(remove_favorite))
        // Same {"detail"} body shape as every other failure.
        .fallback(|| async { (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" }))) })
        .with_state(state)
}
