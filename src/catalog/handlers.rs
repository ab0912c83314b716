/**
 * Catalog Proxy Handlers
 *
 * Authenticated pass-through endpoints over the external film catalog.
 * Upstream failures degrade to an empty list / null body rather than an
 * error status.
 */

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::auth::gate::CurrentUser;
use crate::catalog::client::FilmSummary;
use crate::server::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    pub id: i64,
}

/// GET /movies/search?query=... - keyword search, projected fields only.
pub async fn search_movies(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<FilmSummary>> {
    Json(state.catalog.search(&params.query).await)
}

/// GET /movies?id=... - raw detail record, or null when unavailable.
pub async fn movie_details(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<DetailsQuery>,
) -> Json<Option<Value>> {
    Json(state.catalog.details(params.id).await)
}
