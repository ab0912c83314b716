/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::favorites::db::{list_favorites, FavoriteFilm};

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique, immutable after registration)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// A user together with their eagerly loaded favorites set. This is the
/// authenticated principal handed to protected handlers by the auth gate.
#[derive(Debug, Clone)]
pub struct UserWithFavorites {
    pub user: User,
    pub favorites: Vec<FavoriteFilm>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password_hash, created_at)
        VALUES (?, ?, ?)
        RETURNING id, username, password_hash, created_at
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get user by username
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get user by username with their favorites set attached.
///
/// The favorites load is always performed here so every caller of the
/// auth gate sees a fully populated principal.
pub async fn get_user_with_favorites(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<UserWithFavorites>, sqlx::Error> {
    let Some(user) = get_user_by_username(pool, username).await? else {
        return Ok(None);
    };

    let favorites = list_favorites(pool, user.id).await?;
    Ok(Some(UserWithFavorites { user, favorites }))
}
