//! Shared test fixtures and helpers
#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
