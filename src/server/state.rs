/**
 * Application State Management
 *
 * This module defines the application state shared across handlers.
 *
 * # Thread Safety
 *
 * Every field is cheap to clone and safe for concurrent use:
 * - `SqlitePool` is an internally shared handle
 * - `Arc<TokenConfig>` is immutable after startup
 * - `CatalogClient` wraps a shared `reqwest::Client`
 */

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::tokens::TokenConfig;
use crate::catalog::client::CatalogClient;

/// Application state that holds the database pool and process-wide services
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Signing secret and algorithm, immutable after startup
    pub tokens: Arc<TokenConfig>,
    /// Client for the external film catalog API
    pub catalog: CatalogClient,
}

impl AppState {
    pub fn new(pool: SqlitePool, tokens: TokenConfig, catalog: CatalogClient) -> Self {
        Self {
            pool,
            tokens: Arc::new(tokens),
            catalog,
        }
    }
}
