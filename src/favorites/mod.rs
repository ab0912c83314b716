//! Favorites Module
//!
//! The many-to-many relation between users and catalog films.
//!
//! - **`db`** - `FavoriteFilm` model and raw queries
//! - **`manager`** - idempotent add / existence-checked remove
//! - **`handlers`** - HTTP handlers
//!
//! Film records are shared: the first user to favorite a catalog id
//! creates the row, later users only add join pairs, and the row is
//! never deleted even when the last user removes it.

/// FavoriteFilm model and database operations
pub mod db;

/// Add/remove semantics
pub mod manager;

/// HTTP handlers for favorites endpoints
pub mod handlers;

pub use db::{FavoriteFilm, FilmPayload};
pub use handlers::{add_favorite, remove_favorite};
