/**
 * Server Configuration
 *
 * This module loads and validates server configuration from environment
 * variables. All business logic receives configuration as explicit structs
 * built here once at startup; nothing reads the environment afterwards.
 *
 * # Required Variables
 *
 * - `DATABASE_URL` - SQLite connection string
 * - `SECRET_KEY` - JWT signing secret
 * - `ALGORITHM` - JWT signing algorithm (e.g. "HS256")
 * - `KINOPOISK_TOKEN` - API key for the external film catalog
 *
 * Absence of any required variable is startup-fatal.
 *
 * # Optional Variables
 *
 * - `CATALOG_BASE_URL` - override the external catalog host (used by tests)
 * - `SERVER_PORT` - listen port, defaults to 3000
 */

use jsonwebtoken::Algorithm;
use thiserror::Error;

use crate::auth::tokens::TokenConfig;

const DEFAULT_CATALOG_BASE_URL: &str = "https://kinopoiskapiunofficial.tech";
const DEFAULT_PORT: u16 = 3000;

/// Configuration errors. Any of these aborts startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("unsupported signing algorithm: {0}")]
    BadAlgorithm(String),

    #[error("invalid SERVER_PORT: {0}")]
    BadPort(String),
}

/// External film catalog settings.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API (no trailing slash).
    pub base_url: String,
    /// API key sent as `X-API-KEY` on every request.
    pub api_key: String,
}

/// Full server configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub tokens: TokenConfig,
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Call `dotenv::dotenv()` before this if a `.env` file should be
    /// honored. Returns an error if any required variable is missing,
    /// which the caller treats as fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require("DATABASE_URL")?;
        let secret = require("SECRET_KEY")?;
        let algorithm_name = require("ALGORITHM")?;
        let api_key = require("KINOPOISK_TOKEN")?;

        // HMAC variants only; the secret is a shared key, not a key pair.
        let algorithm = match algorithm_name.as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            _ => return Err(ConfigError::BadAlgorithm(algorithm_name)),
        };

        let base_url = std::env::var("CATALOG_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_string());

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::BadPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            port,
            tokens: TokenConfig::new(secret, algorithm),
            catalog: CatalogConfig { base_url, api_key },
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}
