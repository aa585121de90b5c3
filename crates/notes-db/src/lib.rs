//! Notes Database Layer
//!
//! This crate provides the persistence layer for the notes service:
//! the credential store (users) and the note store, backed by SQLite via sqlx.

pub mod error;
pub mod models;
pub mod repository;
pub mod utils;

pub use error::DbError;
pub use models::*;
pub use repository::Database;
