//! Database test fixtures
//!
//! Provides an in-memory SQLite pool with migrations applied. The pool is
//! capped at a single connection so every query sees the same in-memory
//! database.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Create a migrated in-memory test database pool.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Count of film records, shared across all users. Lets tests assert
/// that orphaned records are kept.
pub async fn count_films(pool: &SqlitePool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM favorite_films")
        .fetch_one(pool)
        .await
        .expect("failed to count films");
    row.0
}
