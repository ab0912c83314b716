/**
 * Favorite Film Model and Database Operations
 *
 * This module holds the `FavoriteFilm` model and the raw queries against
 * the `favorite_films` table and the `user_favorites` join table. The
 * add/remove semantics built on top live in `favorites::manager`.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A film record shared by every user who has favorited it.
///
/// `film_id` is the external catalog id and the natural deduplication key
/// (UNIQUE in the schema). The row is created lazily the first time any
/// user favorites the film and never deleted, even when orphaned.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FavoriteFilm {
    /// Internal row id
    pub id: i64,
    /// External catalog film id
    pub film_id: i64,
    /// Display name
    pub film_name: String,
    /// Release year
    pub year: i64,
    /// External cross-reference id
    pub imdb_id: i64,
    /// Duration in minutes
    pub film_length: i64,
    /// Poster URL
    pub film_poster: String,
    /// Detail-page URL
    pub film_link: String,
}

/// Film data supplied by a client when adding a favorite. Also the wire
/// shape of a film inside favorites responses (internal row ids are not
/// exposed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmPayload {
    pub film_id: i64,
    pub film_name: String,
    pub year: i64,
    pub imdb_id: i64,
    pub film_length: i64,
    pub film_poster: String,
    pub film_link: String,
}

impl From<FavoriteFilm> for FilmPayload {
    fn from(film: FavoriteFilm) -> Self {
        Self {
            film_id: film.film_id,
            film_name: film.film_name,
            year: film.year,
            imdb_id: film.imdb_id,
            film_length: film.film_length,
            film_poster: film.film_poster,
            film_link: film.film_link,
        }
    }
}

/// Look up a film by its external catalog id.
pub async fn get_film_by_catalog_id(
    pool: &SqlitePool,
    film_id: i64,
) -> Result<Option<FavoriteFilm>, sqlx::Error> {
    sqlx::query_as::<_, FavoriteFilm>(
        r#"
        SELECT id, film_id, film_name, year, imdb_id, film_length, film_poster, film_link
        FROM favorite_films
        WHERE film_id = ?
        "#,
    )
    .bind(film_id)
    .fetch_optional(pool)
    .await
}

/// Insert a film record if no record with its catalog id exists yet, and
/// return the surviving row. Two concurrent first-time adds converge on a
/// single row through the UNIQUE constraint.
pub async fn insert_film(
    pool: &SqlitePool,
    data: &FilmPayload,
) -> Result<FavoriteFilm, sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO favorite_films (film_id, film_name, year, imdb_id, film_length, film_poster, film_link)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(film_id) DO NOTHING
        "#,
    )
    .bind(data.film_id)
    .bind(&data.film_name)
    .bind(data.year)
    .bind(data.imdb_id)
    .bind(data.film_length)
    .bind(&data.film_poster)
    .bind(&data.film_link)
    .execute(pool)
    .await?;

    // Re-select so the winner of a conflicting insert is returned either way.
    get_film_by_catalog_id(pool, data.film_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// Insert the (user, film) join pair if it is not already present.
pub async fn link_favorite(
    pool: &SqlitePool,
    user_id: i64,
    favorite_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT OR IGNORE INTO user_favorites (user_id, favorite_id)
        VALUES (?, ?)
        "#,
    )
    .bind(user_id)
    .bind(favorite_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete the (user, film) join pair. Returns the number of rows removed
/// so callers can distinguish "was not favorited".
pub async fn unlink_favorite(
    pool: &SqlitePool,
    user_id: i64,
    favorite_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM user_favorites
        WHERE user_id = ? AND favorite_id = ?
        "#,
    )
    .bind(user_id)
    .bind(favorite_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// All films favorited by a user. No ordering guarantee.
pub async fn list_favorites(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<FavoriteFilm>, sqlx::Error> {
    sqlx::query_as::<_, FavoriteFilm>(
        r#"
        SELECT f.id, f.film_id, f.film_name, f.year, f.imdb_id, f.film_length, f.film_poster, f.film_link
        FROM favorite_films f
        JOIN user_favorites uf ON uf.favorite_id = f.id
        WHERE uf.user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
