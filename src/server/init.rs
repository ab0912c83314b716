/**
 * Server Initialization
 *
 * This module assembles the application: database pool, migrations,
 * shared services and the router.
 *
 * # Initialization Steps
 *
 * 1. Create the SQLite connection pool (creating the file if missing)
 * 2. Run migrations
 * 3. Build the catalog client and app state from configuration
 * 4. Create the router
 *
 * Unlike optional services, the database is required: a connection or
 * migration failure aborts startup.
 */

use std::str::FromStr;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::catalog::client::CatalogClient;
use crate::routes::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Connect to the database and run migrations.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns the database error if the pool cannot be created or
/// migrations fail; the caller treats this as fatal.
pub async fn create_app(config: &Config) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing starfilm backend server");

    let pool = connect_database(&config.database_url).await?;

    let catalog = CatalogClient::new(&config.catalog);
    let state = AppState::new(pool, config.tokens.clone(), catalog);

    Ok(create_router(state))
}
