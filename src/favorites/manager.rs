/**
 * Favorites Manager
 *
 * Add/remove operations on the many-to-many relation between users and
 * catalog films. Add is idempotent; remove requires the pair to exist.
 */

use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::favorites::db::{
    get_film_by_catalog_id, insert_film, link_favorite, unlink_favorite, FavoriteFilm,
    FilmPayload,
};

/// Add a film to a user's favorites.
///
/// The film record is reused if any user already favorited this catalog
/// id, created otherwise. The join pair insert is a no-op when already
/// present, so repeated calls with the same film id leave exactly one
/// film row and one join row.
///
/// # Errors
///
/// * `Favorites` - persistence failure while inserting the join pair
/// * `Database` - failure while resolving or creating the film record
pub async fn add(
    pool: &SqlitePool,
    user_id: i64,
    data: &FilmPayload,
) -> Result<FavoriteFilm, ApiError> {
    let film = match get_film_by_catalog_id(pool, data.film_id).await? {
        Some(existing) => existing,
        None => insert_film(pool, data).await?,
    };

    link_favorite(pool, user_id, film.id)
        .await
        .map_err(|e| ApiError::Favorites(e.to_string()))?;

    tracing::info!(
        "Favorite added: user {} -> film {} ({})",
        user_id,
        film.film_id,
        film.film_name
    );

    Ok(film)
}

/// Remove a film from a user's favorites.
///
/// Only the join pair is deleted; the film record itself is kept even
/// when no user references it anymore.
///
/// # Errors
///
/// * `NotFound` - no film record for this catalog id, or the pair is not
///   currently in the user's favorites
pub async fn remove(
    pool: &SqlitePool,
    user_id: i64,
    catalog_film_id: i64,
) -> Result<FavoriteFilm, ApiError> {
    let film = get_film_by_catalog_id(pool, catalog_film_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let removed = unlink_favorite(pool, user_id, film.id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::info!("Favorite removed: user {} -> film {}", user_id, film.film_id);

    Ok(film)
}
