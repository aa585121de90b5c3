//! Database error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

impl DbError {
    /// Map a unique-constraint violation from sqlx into `Duplicate`,
    /// passing every other error through unchanged.
    pub(crate) fn from_insert(err: sqlx::Error, what: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DbError::Duplicate(what.to_string())
            }
            _ => DbError::Connection(err),
        }
    }
}
