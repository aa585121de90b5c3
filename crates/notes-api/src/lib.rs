//! Notes REST API
//!
//! This crate provides the Axum-based HTTP API for the notes service:
//! registration and login under `/api/auth`, and owner-scoped note CRUD
//! under `/api/notes`.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{AppState, MetricsHandle};
