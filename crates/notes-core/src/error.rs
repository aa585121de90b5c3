//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    /// Unknown account or wrong password; deliberately indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    NotFound(String),

    /// Authenticated, but not the owner of the resource
    #[error("Not authorized")]
    NotAuthorized,

    #[error("Database error: {0}")]
    Database(#[from] notes_db::DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] notes_auth::AuthError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<tokio::task::JoinError> for CoreError {
    fn from(err: tokio::task::JoinError) -> Self {
        CoreError::Internal(format!("Background task failed: {}", err))
    }
}
