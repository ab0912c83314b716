//! Catalog Module
//!
//! Thin proxy over the external film catalog API: keyword search with a
//! projected field subset, and a raw detail pass-through.

/// HTTP client for the external catalog
pub mod client;

/// Proxy endpoint handlers
pub mod handlers;

pub use client::{CatalogClient, FilmSummary};
pub use handlers::{movie_details, search_movies};
