//! starfilm - Movie Favorites Backend
//!
//! A small backend that authenticates users, proxies movie search/detail
//! queries to a third-party film catalog API, and lets authenticated users
//! maintain a personal list of favorited films in a relational store.
//!
//! # Module Structure
//!
//! - **`auth`** - Registration, login, bcrypt password hashing, JWT
//!   bearer-token sessions and the `CurrentUser` gate for protected routes
//! - **`favorites`** - The many-to-many relation between users and catalog
//!   films: shared film records, idempotent add, existence-checked remove
//! - **`catalog`** - Thin proxy over the external film catalog API (keyword
//!   search and raw detail pass-through)
//! - **`server`** - Configuration, shared state and app assembly
//! - **`routes`** - HTTP route wiring
//! - **`error`** - The `ApiError` taxonomy and its HTTP conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use starfilm::server::config::Config;
//! use starfilm::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve with axum
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod routes;
pub mod server;

pub use error::ApiError;
