//! Notes Core Business Logic
//!
//! Registration and login on top of the credential store, and note CRUD
//! scoped to the authenticated owner.

pub mod auth;
pub mod error;
pub mod notes;

pub use auth::AuthService;
pub use error::CoreError;
pub use notes::{NoteInput, NoteService};
